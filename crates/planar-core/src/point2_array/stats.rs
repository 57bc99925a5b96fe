//! Point2Array statistics and geometric extremes.

use super::Point2Array;
use crate::point2::Point2;
use crate::range2::Range2;

impl Point2Array {
    /// Min/max of the x and y coordinates.
    ///
    /// An empty array gives an empty range.
    pub fn range2(&self) -> Range2 {
        let mut range = Range2::new();
        for pt in self.iter() {
            range.add(pt);
        }
        range
    }

    /// Unweighted mean of the points, or `None` if empty.
    pub fn mean(&self) -> Option<Point2> {
        let x = self.x.mean()?;
        let y = self.y.mean()?;
        Some(Point2::new(x, y))
    }

    /// Pointwise midpoints of `self` and `other`.
    ///
    /// Returns `None` if `other` is absent or the sizes differ.
    pub fn mid_point_array(&self, other: Option<&Point2Array>) -> Option<Point2Array> {
        let other = other.filter(|o| o.len() == self.len())?;
        let x = self.x.plus(&other.x).ok()?.multiply_by(0.5);
        let y = self.y.plus(&other.y).ok()?.multiply_by(0.5);
        Point2Array::from_parts(x, y).ok()
    }

    /// Dot product of the x and y arrays: `sum(x[i] * y[i])`.
    ///
    /// Zero for an empty array.
    pub fn sum_product_of_all_elements(&self) -> f64 {
        self.x.iter().zip(self.y.iter()).map(|(x, y)| x * y).sum()
    }

    /// The point with the smallest x; the first one wins ties.
    pub fn point_with_minimum_x(&self) -> Option<Point2> {
        self.point_at(self.x.index_of_smallest())
    }

    /// The point with the largest x; the first one wins ties.
    pub fn point_with_maximum_x(&self) -> Option<Point2> {
        self.point_at(self.x.index_of_largest())
    }

    /// The point with the smallest y; the first one wins ties.
    pub fn point_with_minimum_y(&self) -> Option<Point2> {
        self.point_at(self.y.index_of_smallest())
    }

    /// The point with the largest y; the first one wins ties.
    pub fn point_with_maximum_y(&self) -> Option<Point2> {
        self.point_at(self.y.index_of_largest())
    }

    fn point_at(&self, index: Option<usize>) -> Option<Point2> {
        index.and_then(|i| self.get(i).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Point2Array {
        Point2Array::from_points(&[
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        ])
    }

    #[test]
    fn test_mean() {
        assert_eq!(diagonal().mean(), Some(Point2::new(2.0, 2.0)));
        assert_eq!(Point2Array::new().mean(), None);
    }

    #[test]
    fn test_range2() {
        let range = diagonal().range2();
        assert_eq!(range.x_range().min(), Some(1.0));
        assert_eq!(range.x_range().max(), Some(3.0));
        assert_eq!(range.y_range().min(), Some(1.0));
        assert_eq!(range.y_range().max(), Some(3.0));
        assert!(Point2Array::new().range2().is_empty());
    }

    #[test]
    fn test_mid_point_array() {
        let a = diagonal();
        let b = Point2Array::from_points(&[
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, -3.0),
        ]);
        let mid = a.mid_point_array(Some(&b)).unwrap();
        assert_eq!(
            mid.to_vec(),
            vec![Point2::new(2.0, 1.0), Point2::new(3.0, 1.0), Point2::new(4.0, 0.0)]
        );
        assert_eq!(a.mid_point_array(None), None);
        assert_eq!(a.mid_point_array(Some(&Point2Array::with_size(2))), None);
    }

    #[test]
    fn test_sum_product() {
        let pta = Point2Array::from_vecs(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]).unwrap();
        assert_eq!(pta.sum_product_of_all_elements(), 32.0);
        assert_eq!(Point2Array::new().sum_product_of_all_elements(), 0.0);
    }

    #[test]
    fn test_extremes_are_distinct() {
        let pta = Point2Array::from_points(&[
            Point2::new(2.0, 9.0),
            Point2::new(-1.0, 4.0),
            Point2::new(7.0, -3.0),
            Point2::new(7.0, 9.0),
        ]);
        assert_eq!(pta.point_with_minimum_x(), Some(Point2::new(-1.0, 4.0)));
        assert_eq!(pta.point_with_maximum_x(), Some(Point2::new(7.0, -3.0)));
        assert_eq!(pta.point_with_minimum_y(), Some(Point2::new(7.0, -3.0)));
        assert_eq!(pta.point_with_maximum_y(), Some(Point2::new(2.0, 9.0)));
    }

    #[test]
    fn test_extremes_empty() {
        let pta = Point2Array::new();
        assert_eq!(pta.point_with_minimum_x(), None);
        assert_eq!(pta.point_with_maximum_x(), None);
        assert_eq!(pta.point_with_minimum_y(), None);
        assert_eq!(pta.point_with_maximum_y(), None);
    }
}
