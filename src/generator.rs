//! Seeded generation of synthetic sparse vectors
//!
//! Produces `1 x length` row vectors as [`TripleStore`]s, for feeding the
//! layout conversions with inputs that do not come from a file. The generator
//! owns its RNG, so a given seed always yields the same sequence of vectors.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::matrix::coo::Extrema;
use crate::matrix::{Triple, TripleStore};

/// Generates random sparse row vectors
pub struct SparseVectorGenerator {
    rng: ChaCha8Rng,
}

impl SparseVectorGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a `1 x length` vector with `elements` non-zeros
    ///
    /// Positions are distinct and ascending; values are uniform in `[lo, hi)`
    /// (exactly `lo` when `lo == hi`). When `elements == length` every position
    /// is filled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `elements > length`, or if the
    /// bounds are not finite or `lo > hi`.
    pub fn generate(
        &mut self,
        lo: f64,
        hi: f64,
        length: usize,
        elements: usize,
    ) -> Result<TripleStore> {
        if elements > length {
            return Err(Error::InvalidArgument(format!(
                "cannot initialise vector with more elements ({}) than length ({})",
                elements, length
            )));
        }
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(Error::InvalidArgument(format!(
                "invalid value range [{}, {})",
                lo, hi
            )));
        }

        let positions: Vec<usize> = if elements == length {
            log::debug!("size/elements match - initialising pseudo-dense vector");
            (0..length).collect()
        } else {
            let mut positions = index::sample(&mut self.rng, length, elements).into_vec();
            positions.sort_unstable();
            positions
        };

        let mut extrema = Extrema::default();
        let mut entries = Vec::with_capacity(elements);

        for col in positions {
            let value = lo + self.rng.gen::<f64>() * (hi - lo);
            extrema.observe(value);
            entries.push(Triple::new(0, col, value));
        }

        Ok(TripleStore::from_parts(
            1,
            length,
            elements,
            entries,
            extrema.get(),
        ))
    }
}
