//! In-place Point2Array transformations.

use super::Point2Array;
use crate::point2::Point2;
use crate::transform2::Transform2;

impl Point2Array {
    /// Reverse the order of the points in place.
    pub fn reverse(&mut self) {
        self.x.reverse();
        self.y.reverse();
    }

    /// Replace every point with its image under `transform`.
    pub fn transform_by(&mut self, transform: &Transform2) {
        log::debug!("transforming {} points by {:?}", self.len(), transform.coeffs());
        let xs = self.x.as_slice_mut();
        let ys = self.y.as_slice_mut();
        for (x, y) in xs.iter_mut().zip(ys.iter_mut()) {
            let pt = transform.apply(Point2::new(*x, *y));
            *x = pt.x;
            *y = pt.y;
        }
    }

    /// Translate all points by (dx, dy).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform_by(&Transform2::translation(dx, dy));
    }

    /// Round every coordinate to `places` decimal digits, halves away from
    /// zero. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{Point2, Point2Array};
    ///
    /// let mut pta = Point2Array::from_points(&[Point2::new(1.234, -5.678)]);
    /// assert_eq!(pta.format(1).to_string(), "[(1.2,-5.7)]");
    /// ```
    pub fn format(&mut self, places: i32) -> &mut Self {
        self.x.round_to(places);
        self.y.round_to(places);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pts() -> Point2Array {
        Point2Array::from_points(&[
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 4.0),
            Point2::new(5.0, 6.0),
        ])
    }

    #[test]
    fn test_reverse_keeps_pairs() {
        let mut pta = make_pts();
        pta.reverse();
        assert_eq!(
            pta.to_vec(),
            vec![Point2::new(5.0, 6.0), Point2::new(3.0, 4.0), Point2::new(1.0, 2.0)]
        );
        pta.reverse();
        assert_eq!(pta, make_pts());
    }

    #[test]
    fn test_transform_by() {
        let mut pta = make_pts();
        pta.transform_by(&Transform2::scale(2.0, -1.0));
        assert_eq!(
            pta.to_vec(),
            vec![Point2::new(2.0, -2.0), Point2::new(6.0, -4.0), Point2::new(10.0, -6.0)]
        );
    }

    #[test]
    fn test_translate() {
        let mut pta = make_pts();
        pta.translate(5.0, -5.0);
        assert_eq!(pta.get(0).unwrap(), Point2::new(6.0, -3.0));
        assert_eq!(pta.len(), 3);
    }

    #[test]
    fn test_format_chains() {
        let mut pta = Point2Array::from_points(&[Point2::new(0.125, 2.5), Point2::new(-0.5, 1.0)]);
        let len = pta.format(0).len();
        assert_eq!(len, 2);
        assert_eq!(pta.to_vec(), vec![Point2::new(0.0, 3.0), Point2::new(-1.0, 1.0)]);
    }
}
