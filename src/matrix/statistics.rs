//! Per-row statistics of a coordinate matrix
//!
//! The row lengths are the number of stored entries in each row. They drive
//! the padded layouts: the longest row decides the common padded width.
//!
//! Every statistic lives in its own [`OnceLock`], so it is computed on first
//! request and never recomputed. `OnceLock` only admits a single writer, which
//! keeps the cache sound if a store is shared between threads.

use std::sync::OnceLock;

use crate::matrix::coo::Triple;

/// Counts the entries of each row.
///
/// Repeated `(row, col)` pairs are counted once per occurrence.
pub fn count_row_lengths(n_rows: usize, entries: &[Triple]) -> Vec<usize> {
    let mut lengths = vec![0; n_rows];

    for entry in entries {
        lengths[entry.row] += 1;
    }

    lengths
}

/// Lazily computed row statistics, owned by a [`TripleStore`](crate::TripleStore)
#[derive(Debug, Clone, Default)]
pub struct RowStatistics {
    row_lengths: OnceLock<Vec<usize>>,
    max_row_length: OnceLock<usize>,
    min_row_length: OnceLock<usize>,
    mean_row_length: OnceLock<usize>,
}

impl RowStatistics {
    pub(crate) fn row_lengths(&self, n_rows: usize, entries: &[Triple]) -> &[usize] {
        self.row_lengths.get_or_init(|| {
            log::trace!("building row lengths for {} rows", n_rows);
            count_row_lengths(n_rows, entries)
        })
    }

    pub(crate) fn max_row_length(&self, n_rows: usize, entries: &[Triple]) -> usize {
        *self.max_row_length.get_or_init(|| {
            self.row_lengths(n_rows, entries)
                .iter()
                .copied()
                .max()
                .unwrap_or(0)
        })
    }

    pub(crate) fn min_row_length(&self, n_rows: usize, entries: &[Triple]) -> usize {
        *self.min_row_length.get_or_init(|| {
            self.row_lengths(n_rows, entries)
                .iter()
                .copied()
                .min()
                .unwrap_or(0)
        })
    }

    pub(crate) fn mean_row_length(&self, n_rows: usize, entries: &[Triple]) -> usize {
        *self.mean_row_length.get_or_init(|| {
            let lengths = self.row_lengths(n_rows, entries);
            if lengths.is_empty() {
                return 0;
            }
            lengths.iter().sum::<usize>() / lengths.len()
        })
    }
}
