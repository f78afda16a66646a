//! Plain-text persistence of mask hole coordinates.
//!
//! One hole per line, `x y`, each written as `%+.6e` (explicit sign, seven significant
//! digits, two-digit exponent). Any decimal or scientific notation is accepted back;
//! blank lines and `#` comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use nalgebra::Vector2;

use crate::error::MaskError;

/// Format one value like C's `%+.6e`, e.g. `+1.732051e+00`.
pub fn format_coordinate(value: f64) -> String {
    let rust_style = format!("{:+.6e}", value);
    match rust_style.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => format!(
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            ),
            Err(_) => rust_style,
        },
        None => rust_style,
    }
}

/// Render holes in the mask file format
pub fn format_holes(holes: &[Vector2<f64>]) -> String {
    let mut text = String::with_capacity(holes.len() * 28);
    for hole in holes {
        text.push_str(&format_coordinate(hole.x));
        text.push(' ');
        text.push_str(&format_coordinate(hole.y));
        text.push('\n');
    }
    text
}

/// Write holes in the mask file format
pub fn write_holes<W: Write>(mut writer: W, holes: &[Vector2<f64>]) -> Result<(), MaskError> {
    writer.write_all(format_holes(holes).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parse one line; `Ok(None)` for blank and comment-only lines.
fn parse_line(line: &str, line_number: usize) -> Result<Option<Vector2<f64>>, MaskError> {
    let content = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 2 {
        return Err(MaskError::Parse {
            line: line_number,
            message: format!("expected 2 fields, found {}", fields.len()),
        });
    }

    let mut values = [0.0; 2];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse::<f64>().map_err(|_| MaskError::Parse {
            line: line_number,
            message: format!("'{}' is not a number", field),
        })?;
        if !value.is_finite() {
            return Err(MaskError::Parse {
                line: line_number,
                message: format!("'{}' is not a finite number", field),
            });
        }
    }

    Ok(Some(Vector2::new(values[0], values[1])))
}

/// Parse mask text, failing on the first malformed line
pub fn parse_holes(text: &str) -> Result<Vec<Vector2<f64>>, MaskError> {
    let mut holes = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(hole) = parse_line(line, idx + 1)? {
            holes.push(hole);
        }
    }
    Ok(holes)
}

/// Read mask text from any buffered reader
pub fn read_holes<R: BufRead>(reader: R) -> Result<Vec<Vector2<f64>>, MaskError> {
    let mut holes = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(hole) = parse_line(&line?, idx + 1)? {
            holes.push(hole);
        }
    }
    Ok(holes)
}

/// Save holes to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(path: P, holes: &[Vector2<f64>]) -> Result<(), MaskError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_holes(BufWriter::new(file), holes)?;
    info!("Saved {} holes to {}", holes.len(), path.display());
    Ok(())
}

/// Load holes from `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2<f64>>, MaskError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let holes = read_holes(BufReader::new(file))?;
    info!("Loaded {} holes from {}", holes.len(), path.display());
    Ok(holes)
}

/// Whether a mask file is present at `path`
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}
