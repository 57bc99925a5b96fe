//! Point2 - a two-coordinate value

use crate::transform2::Transform2;
use std::fmt;

/// A 2D point with `f64` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` if both coordinates differ by at most `epsilon`.
    pub fn is_equal_to(&self, other: &Point2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Image of this point under `transform`.
    pub fn transform_by(&self, transform: &Transform2) -> Point2 {
        transform.apply(*self)
    }

    /// Coordinate-wise sum
    pub fn plus(&self, other: &Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }

    /// Point halfway between `self` and `other`
    pub fn mid_point(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (f64, f64) {
    fn from(pt: Point2) -> Self {
        (pt.x, pt.y)
    }
}

/// `(x,y)` with no spaces, the group format of the bracketed point list.
impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_equal_to_needs_both_coords() {
        let a = Point2::new(1.0, 2.0);
        assert!(a.is_equal_to(&Point2::new(1.05, 1.95), 0.1));
        assert!(!a.is_equal_to(&Point2::new(1.0, 2.5), 0.1));
        assert!(!a.is_equal_to(&Point2::new(1.5, 2.0), 0.1));
        assert!(a.is_equal_to(&a, 0.0));
    }

    #[test]
    fn test_mid_point_and_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(6.0, 8.0);
        assert_eq!(a.mid_point(&b), Point2::new(3.0, 4.0));
        assert_eq!(a.distance(&b), 10.0);
        assert_eq!(a.plus(&b), b);
    }

    #[test]
    fn test_conversions_and_display() {
        let p: Point2 = (1.5, -2.0).into();
        assert_eq!(p, Point2::from([1.5, -2.0]));
        assert_eq!(<(f64, f64)>::from(p), (1.5, -2.0));
        assert_eq!(p.to_string(), "(1.5,-2)");
    }

    #[test]
    fn test_transform_by() {
        let p = Point2::new(1.0, 1.0).transform_by(&Transform2::translation(1.0, 2.0));
        assert_eq!(p, Point2::new(2.0, 3.0));
    }
}
