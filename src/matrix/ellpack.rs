//! ELLPACK-family row layouts
//!
//! Three views of the same rows:
//! - [`EllpackMatrix`]: per row, `(col, value)` pairs sorted by column
//! - [`SoaEllpackMatrix`]: the same rows split into parallel column and value arrays
//! - [`PaddedSoaEllpackMatrix`]: the split rows widened to a common length with
//!   [`PAD_COLUMN`] / caller-chosen zero cells
//!
//! Column indices in the split layouts are signed so the padding sentinel fits.

use std::fmt;

/// Column index written into padding cells
pub const PAD_COLUMN: i64 = -1;

/// Row-grouped `(col, value)` pairs, each row sorted ascending by column
#[derive(Clone, PartialEq)]
pub struct EllpackMatrix<T> {
    /// Number of columns of the source matrix
    pub n_cols: usize,

    /// One entry per row, including empty rows
    pub rows: Vec<Vec<(usize, T)>>,
}

impl<T> EllpackMatrix<T> {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Total number of stored pairs
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Structure-of-arrays ELLPACK: `columns[r][k]` pairs with `values[r][k]`
#[derive(Clone, PartialEq)]
pub struct SoaEllpackMatrix<T> {
    /// Number of columns of the source matrix
    pub n_cols: usize,

    /// Column indices per row
    pub columns: Vec<Vec<i64>>,

    /// Values per row, aligned with `columns`
    pub values: Vec<Vec<T>>,
}

impl<T> SoaEllpackMatrix<T> {
    pub fn n_rows(&self) -> usize {
        self.columns.len()
    }

    /// Iterates over `(col, value)` pairs of row `i`
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (i64, &T)> {
        assert!(i < self.n_rows(), "Row index out of bounds");

        self.columns[i].iter().copied().zip(&self.values[i])
    }
}

/// Structure-of-arrays ELLPACK with every row widened to `padded_length`
#[derive(Clone, PartialEq)]
pub struct PaddedSoaEllpackMatrix<T> {
    /// Number of columns of the source matrix
    pub n_cols: usize,

    /// Common length of every row
    pub padded_length: usize,

    /// Number of real (non-padding) cells at the start of each row
    pub row_lengths: Vec<usize>,

    /// Column indices per row, [`PAD_COLUMN`] in padding cells
    pub columns: Vec<Vec<i64>>,

    /// Values per row, the caller's zero in padding cells
    pub values: Vec<Vec<T>>,
}

impl<T> PaddedSoaEllpackMatrix<T> {
    pub fn n_rows(&self) -> usize {
        self.columns.len()
    }

    /// Iterates over the real `(col, value)` pairs of row `i`, skipping padding
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (i64, &T)> {
        assert!(i < self.n_rows(), "Row index out of bounds");

        let len = self.row_lengths[i];
        self.columns[i][..len]
            .iter()
            .copied()
            .zip(&self.values[i][..len])
    }
}

impl<T: fmt::Debug> fmt::Debug for EllpackMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EllpackMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows(), self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_rows_to_print = 5.min(self.n_rows());
        for (i, row) in self.rows.iter().take(max_rows_to_print).enumerate() {
            write!(f, "    row {}: ", i)?;
            if row.is_empty() {
                writeln!(f, "(empty)")?;
                continue;
            }
            for (col, val) in row.iter().take(5) {
                write!(f, "({}, {:?}) ", col, val)?;
            }
            if row.len() > 5 {
                write!(f, "... ({} more)", row.len() - 5)?;
            }
            writeln!(f)?;
        }
        if self.n_rows() > max_rows_to_print {
            writeln!(f, "    ... ({} more rows)", self.n_rows() - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}

fn fmt_soa_rows<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    columns: &[Vec<i64>],
    values: &[Vec<T>],
) -> fmt::Result {
    let max_rows_to_print = 5.min(columns.len());

    for i in 0..max_rows_to_print {
        writeln!(
            f,
            "    row {}: cols {:?} vals {:?}",
            i, columns[i], values[i]
        )?;
    }
    if columns.len() > max_rows_to_print {
        writeln!(f, "    ... ({} more rows)", columns.len() - max_rows_to_print)?;
    }

    Ok(())
}

impl<T: fmt::Debug> fmt::Debug for SoaEllpackMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SoaEllpackMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows(), self.n_cols)?;
        fmt_soa_rows(f, &self.columns, &self.values)?;
        write!(f, "}}")
    }
}

impl<T: fmt::Debug> fmt::Debug for PaddedSoaEllpackMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PaddedSoaEllpackMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows(), self.n_cols)?;
        writeln!(f, "  padded length: {}", self.padded_length)?;
        fmt_soa_rows(f, &self.columns, &self.values)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_row_iter_skips_padding() {
        let padded = PaddedSoaEllpackMatrix {
            n_cols: 4,
            padded_length: 4,
            row_lengths: vec![2, 0],
            columns: vec![vec![0, 3, PAD_COLUMN, PAD_COLUMN], vec![PAD_COLUMN; 4]],
            values: vec![vec![1.0, 2.0, 0.0, 0.0], vec![0.0; 4]],
        };

        let row0: Vec<_> = padded.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1.0), (3, &2.0)]);
        assert_eq!(padded.row_iter(1).count(), 0);
    }

    #[test]
    fn test_ellpack_nnz() {
        let ell = EllpackMatrix {
            n_cols: 3,
            rows: vec![vec![(0, 1), (2, 2)], vec![], vec![(1, 3)]],
        };
        assert_eq!(ell.n_rows(), 3);
        assert_eq!(ell.nnz(), 3);
        assert!(format!("{:?}", ell).contains("(empty)"));
    }

    #[test]
    #[should_panic(expected = "Row index out of bounds")]
    fn test_soa_row_iter_out_of_bounds() {
        let soa: SoaEllpackMatrix<f64> = SoaEllpackMatrix {
            n_cols: 1,
            columns: vec![vec![]],
            values: vec![vec![]],
        };
        let _ = soa.row_iter(1).count();
    }
}
