use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;

/// An RGB color with components in `[0, 1]`.
///
/// Displays as `"R G B"` with two decimals per component, which is the line format of a color
/// file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    pub const PALE_YELLOW: Self = Self::new(0.85, 0.85, 0.25);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Vec3 { x, y, z } = self.0;
        write!(f, "{x:.2} {y:.2} {z:.2}")
    }
}

/// Truncate a category value toward zero.
pub fn truncate(category: f64) -> i64 {
    category.trunc() as i64
}

/// A lookup from integer categories to colors.
///
/// The [`Default`] table maps category 0 to pale yellow and categories 1 and 3 to red. Every
/// other category is unmapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable(BTreeMap<u32, Color>);

impl ColorTable {
    /// An empty table, in which every category is unmapped.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, category: u32, color: Color) -> Option<Color> {
        self.0.insert(category, color)
    }

    /// Returns the color for an integer category, if it has one.
    pub fn get(&self, category: i64) -> Option<Color> {
        let key = u32::try_from(category).ok()?;
        self.0.get(&key).copied()
    }

    /// Truncates a raw category value and returns its color, if it has one.
    pub fn lookup(&self, category: f64) -> Option<Color> {
        self.get(truncate(category))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        [(0, Color::PALE_YELLOW), (1, Color::RED), (3, Color::RED)]
            .into_iter()
            .collect()
    }
}

impl FromIterator<(u32, Color)> for ColorTable {
    fn from_iter<T: IntoIterator<Item = (u32, Color)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What to write for an atom whose category has no color.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Unmapped {
    /// Write an empty line, so the number of lines still matches the number of atoms.
    #[default]
    Blank,
    /// Write this color instead.
    Fill(Color),
    /// Stop the conversion with an [`Error::Unmapped`](crate::Error::Unmapped).
    Error,
}
