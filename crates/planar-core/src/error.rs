//! Error types for planar-core
//!
//! Structural misuse (mismatched sizes, bad indices, odd pair counts) is
//! reported through [`Error`]. Malformed user text handed to the
//! `create_from_*` parsers is not an error: those return `None`.

use thiserror::Error;

/// planar error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two coordinate sequences that must be paired have different lengths
    #[error("incompatible array sizes: {x_len}/{y_len}")]
    IncompatibleSize { x_len: usize, y_len: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Inclusive sub-range does not fit the array
    #[error("invalid range [{start}, {end}] for array of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// A flat x,y sequence must have an even number of values
    #[error("must have even number of values, got {0}")]
    OddLength(usize),

    /// Delimiter is not a valid regular expression
    #[error("invalid delimiter pattern: {0}")]
    InvalidDelimiter(String),

    /// Text could not be read as a number
    #[error("cannot parse number: {0:?}")]
    ParseNumber(String),

    /// Bracketed coordinate text is malformed
    #[error("malformed coordinate list: {0}")]
    ParseCoords(String),

    /// Singular matrix (non-invertible)
    #[error("singular transformation matrix")]
    SingularMatrix,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for planar operations
pub type Result<T> = std::result::Result<T, Error>;
