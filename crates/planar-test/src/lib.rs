//! planar-test - Regression test framework for planar
//!
//! Each regression test creates a [`RegParams`], records numbered
//! comparisons, and asserts on [`RegParams::cleanup`] at the end:
//!
//! ```
//! use planar_test::RegParams;
//!
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(3.0, 1.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"
//! - `RUST_LOG`: log level for the library's trace/debug output

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use planar_core::Point2Array;

/// Parse a bracketed fixture such as `"[(1,2)(3,4)]"`.
///
/// Unlike [`Point2Array::create_from_coords`], a malformed fixture is an
/// error so a typo in a test fails loudly.
pub fn points(text: &str) -> TestResult<Point2Array> {
    text.parse::<Point2Array>()
        .map_err(|e| TestError::FixtureParse {
            text: text.to_string(),
            message: e.to_string(),
        })
}

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
