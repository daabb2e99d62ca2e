//! Errors that can occur while converting a trajectory into color files.

use thiserror::Error;

/// Errors that can occur while reading a trajectory or writing its color files.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the trajectory or writing a color file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The line that should hold the number of atoms in a frame does not.
    #[error("line {line}: expected an atom count, found '{found}'")]
    Header {
        /// Line number where the error occurred (1-based).
        line: usize,
        found: String,
    },

    /// The trajectory ends directly after an atom count.
    #[error("line {line}: expected a comment line after the atom count, got end of file")]
    MissingComment { line: usize },

    /// A frame declares more atoms than there are lines left in the trajectory.
    #[error("frame {frame}: expected {expected} atoms, but the trajectory ends after {found}")]
    Truncated {
        frame: usize,
        expected: usize,
        found: usize,
    },

    /// An atom line could not be parsed.
    #[error("line {line}: {message}")]
    Record { line: usize, message: String },

    /// The category field of an atom line is not a finite number.
    #[error("line {line}: invalid category '{found}'")]
    Category { line: usize, found: String },

    /// A category has no color in the table, and unmapped categories are not allowed.
    #[error("frame {frame}, atom {atom}: category {category} has no color")]
    Unmapped {
        frame: usize,
        atom: usize,
        category: i64,
    },
}

impl Error {
    /// Create a record error at a specific line.
    pub fn record(line: usize, message: impl Into<String>) -> Self {
        Error::Record {
            line,
            message: message.into(),
        }
    }

    /// Create a header error at a specific line.
    pub fn header(line: usize, found: impl Into<String>) -> Self {
        Error::Header {
            line,
            found: found.into(),
        }
    }
}

/// Result type for trajectory conversion.
pub type Result<T> = std::result::Result<T, Error>;
