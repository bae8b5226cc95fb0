//! Matrix Market coordinate-format reader
//!
//! Reads `.mtx` files of the shape
//!
//! ```text
//! %%MatrixMarket matrix coordinate real general
//! % optional comments
//! rows cols nonz
//! row col value      (nonz lines, 1-based)
//! ```
//!
//! into a [`TripleStore`]. Pattern matrices omit the value column and get 1.0
//! for every entry. Symmetric matrices list one triangle only; each
//! off-diagonal entry is mirrored right after the original.

pub mod typecode;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, FormatError, Result};
use crate::matrix::coo::Extrema;
use crate::matrix::{Triple, TripleStore};

pub use typecode::{Field, Format, Object, Symmetry, Typecode};

/// Upper bound on entries reserved up front from the declared count
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 20;

/// Matrix Market format reader
pub struct MatrixMarketIO;

impl MatrixMarketIO {
    /// Read a matrix in Matrix Market format from a file
    pub fn read_path<P: AsRef<Path>>(path: P) -> Result<TripleStore> {
        let path = path.as_ref();
        log::debug!("reading matrix file {}", path.display());

        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read a matrix in Matrix Market format from any buffered reader
    pub fn read_from<R: BufRead>(reader: R) -> Result<TripleStore> {
        let mut lines = reader.split(b'\n').enumerate().map(|(i, bytes)| decode_line(i + 1, bytes));

        // Banner
        let banner = match lines.next() {
            Some(line) => line?.1,
            None => return Err(FormatError::Banner("empty input".to_string()).into()),
        };
        let typecode = Typecode::parse(&banner)?;
        if !typecode.is_supported() {
            return Err(FormatError::UnsupportedTypecode(typecode.to_string()).into());
        }
        log::debug!("matcode: {}", typecode);

        // Skip comments and read the size line
        let (size_line_no, n_rows, n_cols, nonz) = loop {
            let (line_no, line) = match lines.next() {
                Some(line) => line?,
                None => return Err(FormatError::MissingSizeLine.into()),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            let (n_rows, n_cols, nonz) = parse_size_line(line_no, trimmed)?;
            break (line_no, n_rows, n_cols, nonz);
        };
        log::debug!("rows {} cols {} non-zeros {}", n_rows, n_cols, nonz);

        let symmetric = typecode.is_symmetric();
        if symmetric && n_rows != n_cols {
            return Err(FormatError::SizeLine {
                line: size_line_no,
                content: format!("{} {} {} (symmetric matrix must be square)", n_rows, n_cols, nonz),
            }
            .into());
        }

        let pattern = typecode.is_pattern();
        let reserve = if symmetric { nonz.saturating_mul(2) } else { nonz };
        let mut entries = Vec::with_capacity(reserve.min(MAX_PREALLOCATED_ENTRIES));
        let mut extrema = Extrema::default();
        let mut found = 0;

        while found < nonz {
            let (line_no, line) = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(FormatError::Truncated {
                        expected: nonz,
                        found,
                    }
                    .into())
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (row, col, value) = parse_data_line(line_no, trimmed, pattern)?;
            if row == 0 || col == 0 || row > n_rows || col > n_cols {
                return Err(FormatError::IndexOutOfRange {
                    line: line_no,
                    row,
                    col,
                    n_rows,
                    n_cols,
                }
                .into());
            }

            // adjust from 1 based to 0 based
            let entry = Triple::new(row - 1, col - 1, value);
            entries.push(entry);
            if symmetric && !entry.is_diagonal() {
                entries.push(entry.mirrored());
            }
            extrema.observe(value);
            found += 1;
        }

        for line in lines {
            let (line_no, line) = line?;
            if !line.trim().is_empty() {
                return Err(FormatError::TrailingData { line: line_no }.into());
            }
        }

        log::trace!(
            "parsed {} entries ({} after symmetric expansion)",
            nonz,
            entries.len()
        );

        Ok(TripleStore::from_parts(
            n_rows,
            n_cols,
            nonz,
            entries,
            extrema.get(),
        ))
    }
}

/// Turns one raw line into text, dropping a trailing `\r`
fn decode_line(line_no: usize, bytes: std::io::Result<Vec<u8>>) -> Result<(usize, String)> {
    let mut bytes = bytes?;
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    let line = String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8 { line: line_no })?;

    Ok((line_no, line))
}

fn parse_size_line(line_no: usize, line: &str) -> std::result::Result<(usize, usize, usize), FormatError> {
    let malformed = || FormatError::SizeLine {
        line: line_no,
        content: line.to_string(),
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let n_rows = parts[0].parse().map_err(|_| malformed())?;
    let n_cols = parts[1].parse().map_err(|_| malformed())?;
    let nonz = parts[2].parse().map_err(|_| malformed())?;

    Ok((n_rows, n_cols, nonz))
}

/// Parses `row col` or `row col value`, indices still 1-based
fn parse_data_line(
    line_no: usize,
    line: &str,
    pattern: bool,
) -> std::result::Result<(usize, usize, f64), FormatError> {
    let expected = if pattern { "`row col`" } else { "`row col value`" };
    let malformed = || FormatError::DataLine {
        line: line_no,
        content: line.to_string(),
        expected,
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    let n_fields = if pattern { 2 } else { 3 };
    if parts.len() != n_fields {
        return Err(malformed());
    }

    let row: usize = parts[0].parse().map_err(|_| malformed())?;
    let col: usize = parts[1].parse().map_err(|_| malformed())?;
    let value: f64 = if pattern {
        1.0
    } else {
        parts[2].parse().map_err(|_| malformed())?
    };
    // f64 parsing also accepts nan / inf
    if !value.is_finite() {
        return Err(malformed());
    }

    Ok((row, col, value))
}

impl FromStr for TripleStore {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MatrixMarketIO::read_from(s.as_bytes())
    }
}
