#![allow(dead_code)]

use std::ops::Deref;
use std::path::{Path, PathBuf};

pub mod trajectories {
    pub const SINGLE: &str = "tests/trajectories/single.xyz";
    pub const TWO_FRAMES: &str = "tests/trajectories/two_frames.xyz";
    pub const WATER: &str = "tests/trajectories/water.xyz";
    pub const MIXED: &str = "tests/trajectories/mixed.xyz";
    pub const TRUNCATED: &str = "tests/trajectories/truncated.xyz";
    pub const BAD_HEADER: &str = "tests/trajectories/bad_header.xyz";
    pub const BAD_CATEGORY: &str = "tests/trajectories/bad_category.xyz";

    /// The trajectories that convert without errors.
    pub const VALID: [&str; 4] = [SINGLE, TWO_FRAMES, WATER, MIXED];
}

/// A copy of a trajectory in a fresh directory of its own, so its color files land there.
///
/// The directory is removed again when this is dropped.
pub struct Scratch {
    dir: PathBuf,
    path: PathBuf,
}

impl Scratch {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Deref for Scratch {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for Scratch {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Copy a trajectory into a fresh directory named after the test.
pub fn scratch_copy(trajectory: &str, name: &str) -> std::io::Result<Scratch> {
    let dir = std::env::temp_dir().join(format!("xyzclr-{}-{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir)?;
    }
    std::fs::create_dir_all(&dir)?;

    let file_name = Path::new(trajectory)
        .file_name()
        .expect("trajectory paths have a file name");
    let path = dir.join(file_name);
    std::fs::copy(trajectory, &path)?;
    Ok(Scratch { dir, path })
}

/// The names of all color files in a directory, sorted.
pub fn color_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(".clr") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
