//! # ellconv: Matrix Market to ELLPACK layout conversion
//!
//! Reads coordinate-format sparse matrices and rearranges their entries into
//! row-oriented layouts for vectorized or hardware-parallel consumers.
//!
//! ## Overview
//!
//! - **Ingestion**: [`MatrixMarketIO`] parses `real`, `integer` and `pattern`
//!   coordinate matrices, `general` or `symmetric`, into a [`TripleStore`].
//!   Indices are shifted from 1-based to 0-based, pattern entries get the
//!   value 1.0 and symmetric entries are mirrored.
//! - **Row statistics**: row lengths and their max/min/mean, computed once per
//!   store on first use.
//! - **Layouts**:
//!   - **ELLPACK**: per row, `(col, value)` pairs sorted by column
//!   - **SOA-ELLPACK**: per row, a column array and a value array
//!   - **Padded SOA-ELLPACK**: every row widened to a common length, with
//!     column `-1` and a caller-chosen zero in padding cells
//!
//! ## Usage
//!
//! ```
//! use ellconv::TripleStore;
//!
//! let store: TripleStore = "%%MatrixMarket matrix coordinate real general\n\
//!                           2 2 3\n\
//!                           1 1 1.0\n\
//!                           2 1 2.0\n\
//!                           1 2 3.0\n"
//!     .parse()?;
//!
//! let padded = store.to_padded_soa_ellpack(0.0f64, 4)?;
//! assert_eq!(padded.columns[0], vec![0, 1, -1, -1]);
//! assert_eq!(padded.values[1], vec![2.0, 0.0, 0.0, 0.0]);
//! # Ok::<(), ellconv::Error>(())
//! ```

pub mod error;
pub mod generator;
pub mod graph;
pub mod matrix;
pub mod matrix_market;
pub mod utils;

// Re-export primary components
pub use error::{Error, FormatError, Result};
pub use generator::SparseVectorGenerator;
pub use graph::GraphDocument;
pub use matrix::{padded_length, Triple, TripleStore};
pub use matrix::{EllpackMatrix, PaddedSoaEllpackMatrix, SoaEllpackMatrix, PAD_COLUMN};
pub use matrix::{detect_architecture, Architecture, LayoutConfig};
pub use matrix_market::{MatrixMarketIO, Typecode};
pub use utils::to_sprs_triplets;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
