//! RealRange, Range2 - running min/max accumulators
//!
//! A range starts empty and widens as values are added. An empty range is
//! the "no data" marker returned for empty point arrays.

use crate::point2::Point2;
use std::fmt;

/// Min/max of the values added so far.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RealRange {
    bounds: Option<(f64, f64)>,
}

impl RealRange {
    /// Create an empty range
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// Create a range covering `[min, max]` (swapped if given in reverse)
    pub fn from_bounds(min: f64, max: f64) -> Self {
        let mut range = Self::new();
        range.add(min);
        range.add(max);
        range
    }

    /// Widen the range to include `val`. NaN is ignored.
    pub fn add(&mut self, val: f64) {
        if val.is_nan() {
            return;
        }
        self.bounds = Some(match self.bounds {
            None => (val, val),
            Some((min, max)) => (min.min(val), max.max(val)),
        });
    }

    /// `true` if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Smallest value added
    pub fn min(&self) -> Option<f64> {
        self.bounds.map(|(min, _)| min)
    }

    /// Largest value added
    pub fn max(&self) -> Option<f64> {
        self.bounds.map(|(_, max)| max)
    }

    /// `max - min`
    pub fn range(&self) -> Option<f64> {
        self.bounds.map(|(min, max)| max - min)
    }

    /// `true` if `val` lies in `[min, max]`
    pub fn contains(&self, val: f64) -> bool {
        self.bounds
            .is_some_and(|(min, max)| min <= val && val <= max)
    }
}

impl fmt::Display for RealRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Some((min, max)) => write!(f, "({min},{max})"),
            None => f.write_str("(empty)"),
        }
    }
}

/// Independent x and y ranges of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range2 {
    x: RealRange,
    y: RealRange,
}

impl Range2 {
    /// Create an empty range
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen both ranges to include `pt`.
    pub fn add(&mut self, pt: Point2) {
        self.x.add(pt.x);
        self.y.add(pt.y);
    }

    /// Range of the x coordinates
    pub fn x_range(&self) -> RealRange {
        self.x
    }

    /// Range of the y coordinates
    pub fn y_range(&self) -> RealRange {
        self.y
    }

    /// `true` if no point has been added
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// `true` if `pt` lies inside the box spanned by both ranges
    pub fn contains(&self, pt: Point2) -> bool {
        self.x.contains(pt.x) && self.y.contains(pt.y)
    }
}

impl fmt::Display for Range2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("(empty)")
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_range_accumulates() {
        let mut r = RealRange::new();
        assert!(r.is_empty());
        assert_eq!(r.min(), None);
        r.add(3.0);
        r.add(-1.0);
        r.add(f64::NAN);
        r.add(2.0);
        assert_eq!(r.min(), Some(-1.0));
        assert_eq!(r.max(), Some(3.0));
        assert_eq!(r.range(), Some(4.0));
        assert!(r.contains(0.0));
        assert!(!r.contains(3.5));
    }

    #[test]
    fn test_from_bounds_reversed() {
        let r = RealRange::from_bounds(5.0, 1.0);
        assert_eq!((r.min(), r.max()), (Some(1.0), Some(5.0)));
    }

    #[test]
    fn test_range2() {
        let mut r = Range2::new();
        assert!(r.is_empty());
        assert_eq!(r.to_string(), "(empty)");
        r.add(Point2::new(1.0, 4.0));
        r.add(Point2::new(3.0, -2.0));
        assert_eq!(r.x_range(), RealRange::from_bounds(1.0, 3.0));
        assert_eq!(r.y_range(), RealRange::from_bounds(-2.0, 4.0));
        assert!(r.contains(Point2::new(2.0, 0.0)));
        assert_eq!(r.to_string(), "((1,3),(-2,4))");
    }
}
