//! Utility functions and helpers

pub mod formats;

pub use formats::{to_sprs_triplets, BUFFER_ALIGNMENT};
