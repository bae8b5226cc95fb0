//! Coordinate (triplet) storage, the target of the Matrix Market reader

use std::fmt;

use crate::error::{Error, Result};
use crate::matrix::statistics::RowStatistics;

/// A single `(row, col, value)` entry, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl Triple {
    pub fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }

    pub fn is_diagonal(&self) -> bool {
        self.row == self.col
    }

    /// The entry reflected across the diagonal
    pub fn mirrored(&self) -> Self {
        Self {
            row: self.col,
            col: self.row,
            value: self.value,
        }
    }
}

/// An immutable list of coordinate entries plus matrix extents
///
/// Entries keep insertion order (file order for parsed matrices). Duplicate
/// `(row, col)` pairs are kept as separate entries and are never merged.
///
/// For symmetric inputs `nonzero_count` is the declared, pre-mirroring count,
/// while `entries().len()` is the expanded count.
///
/// Row statistics are computed lazily on first request and cached for the
/// lifetime of the store.
#[derive(Clone)]
pub struct TripleStore {
    n_rows: usize,
    n_cols: usize,
    nonzero_count: usize,
    entries: Vec<Triple>,
    min_value: Option<f64>,
    max_value: Option<f64>,
    stats: RowStatistics,
}

impl TripleStore {
    /// Builds a store from already-validated parts.
    pub(crate) fn from_parts(
        n_rows: usize,
        n_cols: usize,
        nonzero_count: usize,
        entries: Vec<Triple>,
        extrema: Option<(f64, f64)>,
    ) -> Self {
        debug_assert!(entries
            .iter()
            .all(|e| e.row < n_rows && e.col < n_cols));

        Self {
            n_rows,
            n_cols,
            nonzero_count,
            entries,
            min_value: extrema.map(|(min, _)| min),
            max_value: extrema.map(|(_, max)| max),
            stats: RowStatistics::default(),
        }
    }

    /// Creates a store from 0-indexed triples.
    ///
    /// The declared non-zero count is the number of triples and the value
    /// extrema are computed over all of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any triple lies outside the
    /// `n_rows x n_cols` extents or holds a NaN or infinite value.
    pub fn from_triples(n_rows: usize, n_cols: usize, entries: Vec<Triple>) -> Result<Self> {
        if let Some(bad) = entries.iter().find(|e| e.row >= n_rows || e.col >= n_cols) {
            return Err(Error::InvalidArgument(format!(
                "entry ({}, {}) outside a {} x {} matrix",
                bad.row, bad.col, n_rows, n_cols
            )));
        }

        if let Some(bad) = entries.iter().find(|e| !e.value.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "entry ({}, {}) has non-finite value {}",
                bad.row, bad.col, bad.value
            )));
        }

        let mut extrema = Extrema::default();
        for entry in &entries {
            extrema.observe(entry.value);
        }

        Ok(Self::from_parts(
            n_rows,
            n_cols,
            entries.len(),
            entries,
            extrema.get(),
        ))
    }

    /// Number of rows (height)
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (width)
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Declared number of non-zeros, before any symmetric expansion
    pub fn nonzero_count(&self) -> usize {
        self.nonzero_count
    }

    /// All stored entries, including mirrored ones
    pub fn entries(&self) -> &[Triple] {
        &self.entries
    }

    /// Smallest original value, `None` for an empty store
    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    /// Largest original value, `None` for an empty store
    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    /// Number of entries in each row
    pub fn row_lengths(&self) -> &[usize] {
        self.stats.row_lengths(self.n_rows, &self.entries)
    }

    /// Longest row length, 0 for a matrix without rows
    pub fn max_row_length(&self) -> usize {
        self.stats.max_row_length(self.n_rows, &self.entries)
    }

    /// Shortest row length, 0 for a matrix without rows
    pub fn min_row_length(&self) -> usize {
        self.stats.min_row_length(self.n_rows, &self.entries)
    }

    /// Mean row length, truncated towards zero
    pub fn mean_row_length(&self) -> usize {
        self.stats.mean_row_length(self.n_rows, &self.entries)
    }
}

/// Running minimum and maximum, seeded by the first observed value
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Extrema(Option<(f64, f64)>);

impl Extrema {
    pub(crate) fn observe(&mut self, value: f64) {
        self.0 = match self.0 {
            None => Some((value, value)),
            Some((min, max)) => Some((
                if value < min { value } else { min },
                if value > max { value } else { max },
            )),
        };
    }

    pub(crate) fn get(self) -> Option<(f64, f64)> {
        self.0
    }
}

impl fmt::Debug for TripleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TripleStore {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(
            f,
            "  nnz: {} declared, {} stored",
            self.nonzero_count,
            self.entries.len()
        )?;

        let max_entries_to_print = 5.min(self.entries.len());
        if max_entries_to_print > 0 {
            write!(f, "  entries: ")?;
            for entry in &self.entries[..max_entries_to_print] {
                write!(f, "({}, {}, {:?}) ", entry.row, entry.col, entry.value)?;
            }
            if self.entries.len() > max_entries_to_print {
                write!(f, "... ({} more)", self.entries.len() - max_entries_to_print)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_triples() {
        let store = TripleStore::from_triples(
            2,
            3,
            vec![
                Triple::new(0, 2, 4.0),
                Triple::new(1, 0, -1.5),
                Triple::new(0, 1, 2.0),
            ],
        )
        .unwrap();

        assert_eq!(store.n_rows(), 2);
        assert_eq!(store.n_cols(), 3);
        assert_eq!(store.nonzero_count(), 3);
        assert_eq!(store.entries().len(), 3);
        assert_eq!(store.min_value(), Some(-1.5));
        assert_eq!(store.max_value(), Some(4.0));
    }

    #[test]
    fn test_from_triples_rejects_out_of_range() {
        let err = TripleStore::from_triples(2, 2, vec![Triple::new(2, 0, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_from_triples_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = TripleStore::from_triples(
                2,
                2,
                vec![Triple::new(0, 0, value), Triple::new(1, 1, 5.0)],
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_empty_store_has_no_extrema() {
        let store = TripleStore::from_triples(3, 3, Vec::new()).unwrap();
        assert_eq!(store.min_value(), None);
        assert_eq!(store.max_value(), None);
    }

    #[test]
    fn test_mirrored() {
        let t = Triple::new(3, 1, 7.0);
        assert_eq!(t.mirrored(), Triple::new(1, 3, 7.0));
        assert!(!t.is_diagonal());
        assert!(Triple::new(2, 2, 0.0).is_diagonal());
    }

    #[test]
    fn test_debug_output() {
        let store = TripleStore::from_triples(1, 1, vec![Triple::new(0, 0, 1.0)]).unwrap();
        let text = format!("{:?}", store);
        assert!(text.contains("1 × 1"));
        assert!(text.contains("(0, 0, 1.0)"));
    }
}
