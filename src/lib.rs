//! Read xyz trajectories and write a color file for each of their frames.
//!
//! Each atom line of an xyz frame carries a category in its fifth field. The category is
//! truncated to an integer and looked up in a [`ColorTable`], and the resulting colors are
//! written to one `.clr` file per frame. See [`convert`] for the whole pass.
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use glam::Vec3;

use crate::reader::{parse_atom, parse_natoms, read_line};

pub use crate::color::{truncate, Color, ColorTable, Unmapped};
pub use crate::convert::{
    base_name, color_file_path, convert, write_colors, ColorFiles, ColorSink, Config, Summary,
    EXTENSION, FRAME_INDEX_WIDTH,
};
pub use crate::error::{Error, Result};
pub use crate::reader::CATEGORY_FIELD;

mod color;
mod convert;
mod error;
mod reader;

/// A single atom line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AtomRecord {
    pub element: String,
    pub position: Vec3,
    /// The raw category value, as written in the trajectory.
    pub category: f64,
}

/// The two lines at the top of each frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Header {
    pub natoms: usize,
    pub comment: String,
}

#[derive(Debug, Default, Clone)]
pub struct Frame {
    /// Index of this frame in the trajectory, starting at zero.
    pub step: usize,
    pub comment: String,
    pub atoms: Vec<AtomRecord>,
}

impl Frame {
    pub fn natoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn coords(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.atoms.iter().map(|atom| atom.position)
    }

    pub fn categories(&self) -> impl Iterator<Item = f64> + '_ {
        self.atoms.iter().map(|atom| atom.category)
    }
}

#[derive(Debug)]
pub struct XYZReader<R> {
    file: BufReader<R>,
    step: usize,
    line: usize,
    buf: String,
}

impl XYZReader<std::fs::File> {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> XYZReader<R> {
    /// Most atoms to allocate for up front, whatever a frame header declares.
    pub const RESERVE_LIMIT: usize = 4096;

    pub fn new(reader: R) -> Self {
        Self {
            file: BufReader::new(reader),
            step: 0,
            line: 0,
            buf: String::new(),
        }
    }

    /// The number of frames that have been read so far.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The number of lines that have been read so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> std::io::Result<bool> {
        let read = read_line(&mut self.file, &mut self.buf)?;
        if read {
            self.line += 1;
        }
        Ok(read)
    }

    /// Reads the atom count and comment line of the next frame.
    ///
    /// Returns [`None`] if the trajectory has no frames left. Blank lines at the very end of the
    /// trajectory are not considered a frame.
    pub fn read_header(&mut self) -> Result<Option<Header>> {
        let mut first_blank = None;
        loop {
            if !self.next_line()? {
                return Ok(None);
            }
            if !self.buf.trim().is_empty() {
                break;
            }
            first_blank.get_or_insert(self.line);
        }
        // A blank line followed by more content is not a trailing blank line.
        if let Some(line) = first_blank {
            return Err(Error::header(line, ""));
        }
        let natoms = parse_natoms(&self.buf, self.line)?;

        if !self.next_line()? {
            return Err(Error::MissingComment { line: self.line });
        }
        Ok(Some(Header {
            natoms,
            comment: self.buf.clone(),
        }))
    }

    /// Reads the next [`Frame`] into `frame` and advances one step.
    ///
    /// Returns `false` if the trajectory has no frames left, in which case `frame` is left
    /// untouched.
    pub fn read_frame(&mut self, frame: &mut Frame) -> Result<bool> {
        let header = match self.read_header()? {
            Some(header) => header,
            None => return Ok(false),
        };

        frame.atoms.clear();
        // The count is only a claim until the lines are there.
        frame.atoms.reserve(header.natoms.min(Self::RESERVE_LIMIT));
        for found in 0..header.natoms {
            if !self.next_line()? {
                return Err(Error::Truncated {
                    frame: self.step,
                    expected: header.natoms,
                    found,
                });
            }
            frame.atoms.push(parse_atom(&self.buf, self.line)?);
        }
        log::trace!(
            "read frame {} ({} atoms) up to line {}",
            self.step,
            header.natoms,
            self.line
        );

        frame.step = self.step;
        frame.comment = header.comment;
        self.step += 1;

        Ok(true)
    }

    /// A convenience function to read all frames in a trajectory.
    ///
    /// It is likely more efficient to use [`XYZReader::read_frame`] if you are only interested in
    /// the values of a single frame at a time.
    pub fn read_all_frames(&mut self) -> Result<Box<[Frame]>> {
        let mut frames = Vec::new();
        loop {
            let mut frame = Frame::default();
            if !self.read_frame(&mut frame)? {
                break;
            }
            frames.push(frame);
        }
        Ok(frames.into_boxed_slice())
    }
}

impl<R: Read + Seek> XYZReader<R> {
    /// Go back to the start of the trajectory.
    pub fn home(&mut self) -> std::io::Result<()> {
        self.file.rewind()?;
        self.step = 0;
        self.line = 0;
        Ok(())
    }
}
