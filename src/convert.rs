use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::color::{Color, ColorTable, Unmapped};
use crate::error::{Error, Result};
use crate::{AtomRecord, Frame, XYZReader};

/// Number of digits of the frame index in a color file name.
pub const FRAME_INDEX_WIDTH: usize = 5;
/// Extension of a color file.
pub const EXTENSION: &str = "clr";

/// Settings for a conversion.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub table: ColorTable,
    pub unmapped: Unmapped,
}

impl Config {
    pub fn with_table(self, table: ColorTable) -> Self {
        Self { table, ..self }
    }

    pub fn with_unmapped(self, unmapped: Unmapped) -> Self {
        Self { unmapped, ..self }
    }

    /// Determine the line to write for an atom.
    ///
    /// A return value of [`None`] stands for an empty line.
    fn color(&self, frame: usize, atom: usize, record: &AtomRecord) -> Result<Option<Color>> {
        if let Some(color) = self.table.lookup(record.category) {
            return Ok(Some(color));
        }
        log::trace!(
            "frame {frame}, atom {atom}: category {} has no color",
            record.category
        );
        match self.unmapped {
            Unmapped::Blank => Ok(None),
            Unmapped::Fill(color) => Ok(Some(color)),
            Unmapped::Error => Err(Error::Unmapped {
                frame,
                atom,
                category: crate::color::truncate(record.category),
            }),
        }
    }
}

/// Totals of a finished conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub frames: usize,
    pub atoms: usize,
}

/// Destination for the colors of each frame.
pub trait ColorSink {
    /// Store the colors of frame `frame`, one entry per atom. [`None`] is an empty line.
    fn write_frame(&mut self, frame: usize, colors: &[Option<Color>]) -> Result<()>;
}

/// Writes every frame to its own color file, `<base><frame>.clr`.
#[derive(Debug, Clone)]
pub struct ColorFiles {
    base: PathBuf,
}

impl ColorFiles {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Use the [`base_name`] of a trajectory path.
    pub fn for_trajectory(path: impl AsRef<Path>) -> Self {
        Self::new(base_name(path))
    }

    pub fn path(&self, frame: usize) -> PathBuf {
        color_file_path(&self.base, frame)
    }
}

impl ColorSink for ColorFiles {
    fn write_frame(&mut self, frame: usize, colors: &[Option<Color>]) -> Result<()> {
        let path = self.path(frame);
        let mut writer = BufWriter::new(File::create(&path)?);
        write_colors(&mut writer, colors)?;
        // Flush explicitly, since dropping a BufWriter swallows write errors.
        writer.flush()?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Write one line per atom.
pub fn write_colors<W: Write>(writer: &mut W, colors: &[Option<Color>]) -> std::io::Result<()> {
    for color in colors {
        match color {
            Some(color) => writeln!(writer, "{color}")?,
            None => writeln!(writer)?,
        }
    }
    Ok(())
}

/// The prefix for the color files of a trajectory.
///
/// This is the file name of `path` up to its first `.`, in the same directory as `path`. For
/// `runs/traj.1.xyz` that is `runs/traj`.
pub fn base_name(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    match path.parent() {
        Some(parent) => parent.join(stem),
        None => PathBuf::from(stem),
    }
}

/// The path of the color file for a frame, such as `traj00042.clr`.
pub fn color_file_path(base: impl AsRef<Path>, frame: usize) -> PathBuf {
    let mut path = base.as_ref().as_os_str().to_owned();
    path.push(format!(
        "{frame:0width$}.{EXTENSION}",
        width = FRAME_INDEX_WIDTH
    ));
    PathBuf::from(path)
}

/// Convert every remaining frame of `reader` into colors and hand them to `sink`.
///
/// Frames are numbered from zero, starting at the first frame this call reads. A frame is read
/// completely before it is written, so a frame that fails to parse is never written. Any error
/// stops the conversion; frames written before it stay written.
pub fn convert<R: Read>(
    reader: &mut XYZReader<R>,
    config: &Config,
    sink: &mut impl ColorSink,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut frame = Frame::default();
    let mut colors = Vec::new();
    loop {
        let idx = summary.frames;
        // The reader counts frames from where it was created, the files count from here.
        let read = reader.read_frame(&mut frame).map_err(|err| match err {
            Error::Truncated {
                expected, found, ..
            } => Error::Truncated {
                frame: idx,
                expected,
                found,
            },
            err => err,
        })?;
        if !read {
            break;
        }
        log::info!("frame {idx:05}: {} atoms", frame.natoms());

        colors.clear();
        for (atom, record) in frame.atoms.iter().enumerate() {
            colors.push(config.color(idx, atom, record)?);
        }
        sink.write_frame(idx, &colors)?;

        summary.frames += 1;
        summary.atoms += frame.natoms();
    }

    Ok(summary)
}
