//! planar - 2D point arrays for Rust
//!
//! A point array is an ordered collection of 2D points kept as two
//! parallel coordinate arrays.
//!
//! # Overview
//!
//! - Construction from coordinate arrays, point lists and text
//! - Element access, append, delete, reverse
//! - Affine transforms and decimal rounding
//! - Range, mean, midpoints, extreme points, sum-product
//! - Stable sorting on either axis, inclusive sub-arrays
//!
//! # Example
//!
//! ```
//! use planar::{Point2, Point2Array, Transform2};
//!
//! let mut pta = Point2Array::create_from_pairs("1,2,3,4", ",").unwrap().unwrap();
//! pta.transform_by(&Transform2::translation(1.0, 1.0));
//! assert_eq!(pta.to_string(), "[(2,3)(4,5)]");
//! assert_eq!(pta.point_with_maximum_x(), Some(Point2::new(4.0, 5.0)));
//! ```

// Re-export core types
pub use planar_core::*;
