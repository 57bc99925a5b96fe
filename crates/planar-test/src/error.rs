//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to parse a test fixture
    #[error("failed to parse fixture '{text}': {message}")]
    FixtureParse { text: String, message: String },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Point array comparison failed
    #[error("point comparison failed at index {index}")]
    PointMismatch { index: usize },

    /// String comparison failed
    #[error("string comparison failed at index {index}: expected {expected:?}, got {actual:?}")]
    StringMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// Boolean check failed
    #[error("check failed at index {index}: {what}")]
    CheckFailed { index: usize, what: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] planar_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
