// Matrix data structures and layout conversions

pub mod config;
pub mod conversion;
pub mod coo;
pub mod ellpack;
pub mod statistics;

pub use config::{detect_architecture, Architecture, LayoutConfig};
pub use conversion::padded_length;
pub use coo::{Triple, TripleStore};
pub use ellpack::{EllpackMatrix, PaddedSoaEllpackMatrix, SoaEllpackMatrix, PAD_COLUMN};
pub use statistics::{count_row_lengths, RowStatistics};
