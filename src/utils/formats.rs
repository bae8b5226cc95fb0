//! Utilities for handing our layouts to external libraries

use aligned_vec::AVec;
use ndarray::Array2;
use sprs::TriMat;

use crate::matrix::{PaddedSoaEllpackMatrix, TripleStore};

/// Alignment of the flat buffers, one cache line / one AVX-512 register
pub const BUFFER_ALIGNMENT: usize = 64;

/// Converts a triple store to an sprs triplet matrix
///
/// Duplicate entries stay separate triplets; sprs sums them only when the
/// triplet matrix is compressed with `to_csr` / `to_csc`.
pub fn to_sprs_triplets(store: &TripleStore) -> TriMat<f64> {
    let mut triplets = TriMat::with_capacity((store.n_rows(), store.n_cols()), store.entries().len());

    for entry in store.entries() {
        triplets.add_triplet(entry.row, entry.col, entry.value);
    }

    triplets
}

impl<T: Copy> PaddedSoaEllpackMatrix<T> {
    /// Dense `(n_rows, padded_length)` views of the column and value arrays
    pub fn to_arrays(&self) -> (Array2<i64>, Array2<T>) {
        let shape = (self.n_rows(), self.padded_length);

        let columns = Array2::from_shape_fn(shape, |(r, k)| self.columns[r][k]);
        let values = Array2::from_shape_fn(shape, |(r, k)| self.values[r][k]);

        (columns, values)
    }

    /// Row-major flat copies of the column and value arrays in aligned memory
    ///
    /// Row `r` occupies `[r * padded_length, (r + 1) * padded_length)`.
    pub fn to_aligned(&self) -> (AVec<i64>, AVec<T>) {
        let columns = AVec::from_iter(
            BUFFER_ALIGNMENT,
            self.columns.iter().flat_map(|row| row.iter().copied()),
        );
        let values = AVec::from_iter(
            BUFFER_ALIGNMENT,
            self.values.iter().flat_map(|row| row.iter().copied()),
        );

        (columns, values)
    }
}
