//! planar core - 2D point arrays
//!
//! This crate provides the data structures of the planar library:
//!
//! - [`Point2Array`] - Ordered points stored as parallel x/y arrays
//! - [`RealArray`] - Numeric arrays backing each coordinate axis
//! - [`Point2`] - A single (x, y) value
//! - [`Range2`] / [`RealRange`] - Min/max accumulators
//! - [`Transform2`] - Affine 2D transforms
//!
//! # Example
//!
//! ```
//! use planar_core::{Axis, Point2, Point2Array};
//!
//! let mut pta = Point2Array::create_from_coords("[(3,1)(1,4)(2,2)]").unwrap();
//! pta.sort_ascending(Axis::X);
//! assert_eq!(pta.to_string(), "[(1,4)(2,2)(3,1)]");
//! assert_eq!(pta.mean(), Some(Point2::new(2.0, 7.0 / 3.0)));
//! ```

pub mod error;
pub mod number;
pub mod point2;
pub mod point2_array;
pub mod range2;
pub mod real_array;
pub mod transform2;

pub use error::{Error, Result};
pub use point2::Point2;
pub use point2_array::{Axis, Point2Array, Point2Iter};
pub use range2::{Range2, RealRange};
pub use real_array::{RealArray, SortOrder};
pub use transform2::Transform2;
