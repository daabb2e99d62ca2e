use std::io::{self, BufRead};

use glam::Vec3;

use crate::error::{Error, Result};
use crate::AtomRecord;

/// Position of the category among the whitespace-separated fields of an atom line (1-based).
pub const CATEGORY_FIELD: usize = 5;

/// Read the next line into `buf`, without its line ending.
///
/// Returns `false` once the reader is exhausted.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Parse the atom count at the top of a frame.
pub(crate) fn parse_natoms(line: &str, line_number: usize) -> Result<usize> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| Error::header(line_number, trimmed))
}

/// Parse an atom line of the form `element x y z category [...]`.
///
/// Fields beyond the category are ignored.
pub(crate) fn parse_atom(line: &str, line_number: usize) -> Result<AtomRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < CATEGORY_FIELD {
        return Err(Error::record(
            line_number,
            format!(
                "atom line too short: expected 'element x y z category', got '{}'",
                line.trim()
            ),
        ));
    }

    let mut position = [0.0; 3];
    for (axis, (value, field)) in ["x", "y", "z"]
        .into_iter()
        .zip(position.iter_mut().zip(&fields[1..4]))
    {
        *value = field.parse().map_err(|_| {
            Error::record(line_number, format!("invalid {axis} coordinate '{field}'"))
        })?;
    }

    let field = fields[CATEGORY_FIELD - 1];
    let category = parse_category(field).ok_or_else(|| Error::Category {
        line: line_number,
        found: field.to_string(),
    })?;

    Ok(AtomRecord {
        element: fields[0].to_string(),
        position: Vec3::from_array(position),
        category,
    })
}

/// Categories may be written as integers or floats. Anything that is not a finite number is
/// rejected.
fn parse_category(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|value| value.is_finite())
}
