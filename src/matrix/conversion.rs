//! Conversion from coordinate storage to ELLPACK-family layouts
//!
//! Values are stored as `f64` and narrowed to the requested element type with
//! [`AsPrimitive`], i.e. Rust `as` semantics: integral targets truncate toward
//! zero and saturate at their bounds, NaN becomes 0, and `f32` rounds to the
//! nearest representable value. The narrowing is intentional and never an error.

use num_traits::AsPrimitive;

use crate::error::{Error, Result};
use crate::matrix::config::LayoutConfig;
use crate::matrix::ellpack::{EllpackMatrix, PaddedSoaEllpackMatrix, SoaEllpackMatrix, PAD_COLUMN};
use crate::matrix::TripleStore;

/// Width every row is padded to for a given longest row.
///
/// Always adds a strictly positive pad: a row length that is already a
/// multiple of `modulo` still gets a full extra block of `modulo` cells.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `modulo` is zero.
pub fn padded_length(max_row_length: usize, modulo: usize) -> Result<usize> {
    if modulo == 0 {
        return Err(Error::InvalidArgument(
            "padding modulus must be positive".to_string(),
        ));
    }

    Ok(max_row_length + (modulo - max_row_length % modulo))
}

impl TripleStore {
    /// Groups entries by row and sorts each row by column.
    ///
    /// Every row of the matrix is present, empty rows as empty vectors. The
    /// sort is unstable, so duplicated columns within a row come out in an
    /// unspecified relative order.
    pub fn to_ellpack<T>(&self) -> EllpackMatrix<T>
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        let mut rows: Vec<Vec<(usize, T)>> = self
            .row_lengths()
            .iter()
            .map(|&len| Vec::with_capacity(len))
            .collect();

        for entry in self.entries() {
            rows[entry.row].push((entry.col, entry.value.as_()));
        }

        for row in &mut rows {
            row.sort_unstable_by_key(|&(col, _)| col);
        }

        EllpackMatrix {
            n_cols: self.n_cols(),
            rows,
        }
    }

    /// Splits the ELLPACK rows into parallel column and value arrays.
    pub fn to_soa_ellpack<T>(&self) -> SoaEllpackMatrix<T>
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        let ellpack = self.to_ellpack::<T>();

        let mut columns = Vec::with_capacity(ellpack.n_rows());
        let mut values = Vec::with_capacity(ellpack.n_rows());

        for row in ellpack.rows {
            let mut row_cols = Vec::with_capacity(row.len());
            let mut row_vals = Vec::with_capacity(row.len());

            for (col, val) in row {
                row_cols.push(col as i64);
                row_vals.push(val);
            }

            columns.push(row_cols);
            values.push(row_vals);
        }

        SoaEllpackMatrix {
            n_cols: ellpack.n_cols,
            columns,
            values,
        }
    }

    /// Builds the SOA-ELLPACK layout with every row widened to a common length.
    ///
    /// The common length is [`padded_length`] of the longest row. Padding
    /// cells hold [`PAD_COLUMN`] and `zero`; real cells keep their position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `modulo` is zero.
    pub fn to_padded_soa_ellpack<T>(
        &self,
        zero: T,
        modulo: usize,
    ) -> Result<PaddedSoaEllpackMatrix<T>>
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        let max_length = self.max_row_length();
        let padded = padded_length(max_length, modulo)?;
        log::debug!(
            "max row length: {}, padded (by {}): {}",
            max_length,
            modulo,
            padded
        );

        let soa = self.to_soa_ellpack::<T>();
        let mut columns = soa.columns;
        let mut values = soa.values;

        for row in &mut columns {
            row.resize(padded, PAD_COLUMN);
        }
        for row in &mut values {
            row.resize(padded, zero);
        }

        Ok(PaddedSoaEllpackMatrix {
            n_cols: soa.n_cols,
            padded_length: padded,
            row_lengths: self.row_lengths().to_vec(),
            columns,
            values,
        })
    }

    /// Like [`to_padded_soa_ellpack`](Self::to_padded_soa_ellpack), taking the
    /// padding modulus from a [`LayoutConfig`].
    pub fn to_padded_soa_ellpack_with<T>(
        &self,
        zero: T,
        config: &LayoutConfig,
    ) -> Result<PaddedSoaEllpackMatrix<T>>
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        self.to_padded_soa_ellpack(zero, config.pad_modulo_for::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::config::Architecture;
    use crate::matrix::Triple;

    //    [1.0 3.0]
    //    [2.0 0  ]
    fn small_store() -> TripleStore {
        TripleStore::from_triples(
            2,
            2,
            vec![
                Triple::new(0, 0, 1.0),
                Triple::new(1, 0, 2.0),
                Triple::new(0, 1, 3.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_padded_length() {
        assert_eq!(padded_length(2, 4).unwrap(), 4);
        assert_eq!(padded_length(5, 4).unwrap(), 8);
        // Already aligned still gains a full block
        assert_eq!(padded_length(4, 4).unwrap(), 8);
        assert_eq!(padded_length(0, 3).unwrap(), 3);
        assert_eq!(padded_length(7, 1).unwrap(), 8);
        assert!(padded_length(3, 0).is_err());
    }

    #[test]
    fn test_to_ellpack() {
        let ell = small_store().to_ellpack::<f64>();

        assert_eq!(ell.n_rows(), 2);
        assert_eq!(ell.rows[0], vec![(0, 1.0), (1, 3.0)]);
        assert_eq!(ell.rows[1], vec![(0, 2.0)]);
    }

    #[test]
    fn test_to_ellpack_keeps_empty_rows() {
        let store =
            TripleStore::from_triples(4, 4, vec![Triple::new(2, 3, 1.0), Triple::new(2, 0, 5.0)])
                .unwrap();
        let ell = store.to_ellpack::<f32>();

        assert_eq!(ell.n_rows(), 4);
        assert!(ell.rows[0].is_empty());
        assert!(ell.rows[1].is_empty());
        assert_eq!(ell.rows[2], vec![(0, 5.0f32), (3, 1.0f32)]);
        assert!(ell.rows[3].is_empty());
    }

    #[test]
    fn test_to_ellpack_narrows_to_integer() {
        let store = TripleStore::from_triples(
            1,
            3,
            vec![
                Triple::new(0, 2, 2.9),
                Triple::new(0, 0, -1.7),
                Triple::new(0, 1, 1e12),
            ],
        )
        .unwrap();
        let ell = store.to_ellpack::<i32>();

        assert_eq!(ell.rows[0], vec![(0, -1), (1, i32::MAX), (2, 2)]);
    }

    #[test]
    fn test_to_soa_ellpack() {
        let soa = small_store().to_soa_ellpack::<f64>();

        assert_eq!(soa.columns, vec![vec![0, 1], vec![0]]);
        assert_eq!(soa.values, vec![vec![1.0, 3.0], vec![2.0]]);
    }

    #[test]
    fn test_to_padded_soa_ellpack() {
        let padded = small_store().to_padded_soa_ellpack(0.0f64, 4).unwrap();

        assert_eq!(padded.padded_length, 4);
        assert_eq!(padded.row_lengths, vec![2, 1]);
        assert_eq!(padded.columns[0], vec![0, 1, -1, -1]);
        assert_eq!(padded.values[0], vec![1.0, 3.0, 0.0, 0.0]);
        assert_eq!(padded.columns[1], vec![0, -1, -1, -1]);
        assert_eq!(padded.values[1], vec![2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_padding_uses_caller_zero() {
        let padded = small_store().to_padded_soa_ellpack(-9i32, 2).unwrap();

        // max row length 2 is aligned, so a full block of 2 is appended
        assert_eq!(padded.padded_length, 4);
        assert_eq!(padded.values[1], vec![2, -9, -9, -9]);
    }

    #[test]
    fn test_padding_rejects_zero_modulo() {
        let err = small_store().to_padded_soa_ellpack(0.0f32, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_padding_from_config() {
        let config = LayoutConfig::for_architecture(Architecture::ArmNeon);
        // 16-byte vectors hold 4 f32 lanes
        let padded = small_store()
            .to_padded_soa_ellpack_with(0.0f32, &config)
            .unwrap();
        assert_eq!(padded.padded_length, 4);

        let config = config.with_pad_modulo(3);
        let padded = small_store()
            .to_padded_soa_ellpack_with(0.0f32, &config)
            .unwrap();
        assert_eq!(padded.padded_length, 3);
    }
}
