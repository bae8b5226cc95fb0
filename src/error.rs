//! Error types shared across the crate

use std::io;

/// Errors produced while decoding a Matrix Market source.
///
/// Line numbers are 1-based and count every physical line of the input,
/// including the banner and comments.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("could not read matrix market banner: {0}")]
    Banner(String),

    #[error("cannot process this matrix type: {0}")]
    UnsupportedTypecode(String),

    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("missing size line (rows cols non-zeros)")]
    MissingSizeLine,

    #[error("line {line}: malformed size line {content:?}")]
    SizeLine { line: usize, content: String },

    #[error("line {line}: malformed data line {content:?}, expected {expected}")]
    DataLine {
        line: usize,
        content: String,
        expected: &'static str,
    },

    #[error("line {line}: entry ({row}, {col}) outside a {n_rows} x {n_cols} matrix")]
    IndexOutOfRange {
        line: usize,
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    #[error("expected {expected} data lines, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("line {line}: data after the declared number of entries")]
    TrailingData { line: usize },
}

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
