//! Point2Array - Arrays of 2D points
//!
//! An ordered collection of points held as two parallel coordinate arrays.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y [`RealArray`]s (SoA layout). Both
//! arrays always have the same length; every operation that changes the
//! number of points changes both in lockstep.
//!
//! # Submodules
//!
//! - `serial` - text parsing and emission
//! - `stats` - range, mean, midpoints, extremes
//! - `sort` - axis sorting and sub-arrays
//! - `transform` - reversal, affine transforms, rounding

mod serial;
mod sort;
mod stats;
mod transform;

pub use sort::Axis;

use crate::error::{Error, Result};
use crate::point2::Point2;
use crate::real_array::RealArray;

/// Array of points.
///
/// Stores 2D points as parallel x/y coordinate arrays. `Clone` deep-copies
/// both arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point2Array {
    /// X coordinates
    x: RealArray,
    /// Y coordinates
    y: RealArray,
}

impl Point2Array {
    /// Create a new empty Point2Array.
    pub fn new() -> Self {
        Self {
            x: RealArray::new(),
            y: RealArray::new(),
        }
    }

    /// Create a Point2Array with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: RealArray::with_capacity(capacity),
            y: RealArray::with_capacity(capacity),
        }
    }

    /// Create a Point2Array of `size` points, all at the origin.
    pub fn with_size(size: usize) -> Self {
        Self {
            x: RealArray::with_size(size),
            y: RealArray::with_size(size),
        }
    }

    /// Create a Point2Array from coordinate vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSize`] if `x` and `y` have different lengths.
    pub fn from_vecs(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Self::from_parts(RealArray::from_vec(x), RealArray::from_vec(y))
    }

    /// Create a Point2Array from copies of two coordinate arrays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSize`] if `x` and `y` have different lengths.
    pub fn from_arrays(x: &RealArray, y: &RealArray) -> Result<Self> {
        Self::from_parts(x.clone(), y.clone())
    }

    pub(crate) fn from_parts(x: RealArray, y: RealArray) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::IncompatibleSize {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Create a Point2Array holding `points` in order.
    pub fn from_points(points: &[Point2]) -> Self {
        points.iter().copied().collect()
    }

    /// Deep copy of `source`, or an empty array when there is no source.
    pub fn copy_of(source: Option<&Point2Array>) -> Self {
        source.cloned().unwrap_or_default()
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn get(&self, index: usize) -> Result<Point2> {
        match (self.x.get(index), self.y.get(index)) {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Same as [`get`](Self::get).
    pub fn element_at(&self, index: usize) -> Result<Point2> {
        self.get(index)
    }

    /// The last point, or `None` if empty.
    pub fn last(&self) -> Option<Point2> {
        self.len().checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Same as [`last`](Self::last).
    pub fn last_point(&self) -> Option<Point2> {
        self.last()
    }

    /// Add a point.
    pub fn push(&mut self, pt: Point2) {
        self.x.push(pt.x);
        self.y.push(pt.y);
    }

    /// Append all points of `other`. `None` leaves the array unchanged.
    pub fn append(&mut self, other: Option<&Point2Array>) {
        if let Some(other) = other {
            self.x.append(&other.x);
            self.y.append(&other.y);
        }
    }

    /// Overwrite the point at index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds; no
    /// coordinate is modified in that case.
    pub fn set(&mut self, index: usize, pt: Point2) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.x.set(index, pt.x)?;
        self.y.set(index, pt.y)
    }

    /// Remove a point at index, shifting later points down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Result<Point2> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let x = self.x.remove(index)?;
        let y = self.y.remove(index)?;
        Ok(Point2::new(x, y))
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }

    /// Borrowed view of the X coordinates.
    pub fn x_array(&self) -> &RealArray {
        &self.x
    }

    /// Borrowed view of the Y coordinates.
    pub fn y_array(&self) -> &RealArray {
        &self.y
    }

    /// Mutable view of the X coordinates.
    ///
    /// Writes go straight into this array. The view is a slice, so the
    /// number of points cannot change through it.
    pub fn x_values_mut(&mut self) -> &mut [f64] {
        self.x.as_slice_mut()
    }

    /// Mutable view of the Y coordinates. See [`x_values_mut`](Self::x_values_mut).
    pub fn y_values_mut(&mut self) -> &mut [f64] {
        self.y.as_slice_mut()
    }

    /// Copy of the X coordinates.
    pub fn to_x_array(&self) -> RealArray {
        self.x.clone()
    }

    /// Copy of the Y coordinates.
    pub fn to_y_array(&self) -> RealArray {
        self.y.clone()
    }

    /// Split into the two coordinate arrays.
    pub fn into_arrays(self) -> (RealArray, RealArray) {
        (self.x, self.y)
    }

    /// All points, in index order.
    pub fn to_vec(&self) -> Vec<Point2> {
        self.iter().collect()
    }

    /// `true` if `other` has the same size and every pair of points agrees
    /// within `epsilon` in both coordinates.
    pub fn is_equal_to(&self, other: Option<&Point2Array>, epsilon: f64) -> bool {
        match other {
            Some(other) if other.len() == self.len() => self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.is_equal_to(&b, epsilon)),
            _ => false,
        }
    }

    /// Create an iterator over points.
    ///
    /// Each call starts a fresh pass from the first point.
    pub fn iter(&self) -> Point2Iter<'_> {
        Point2Iter {
            x: self.x.as_slice(),
            y: self.y.as_slice(),
            index: 0,
        }
    }
}

/// Iterator over Point2Array points.
///
/// Walks both coordinate arrays in lockstep and stops at the end of the
/// shorter one.
pub struct Point2Iter<'a> {
    x: &'a [f64],
    y: &'a [f64],
    index: usize,
}

impl Iterator for Point2Iter<'_> {
    type Item = Point2;

    fn next(&mut self) -> Option<Self::Item> {
        let x = *self.x.get(self.index)?;
        let y = *self.y.get(self.index)?;
        self.index += 1;
        Some(Point2::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.x.len().min(self.y.len()) - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Point2Iter<'_> {}

impl<'a> IntoIterator for &'a Point2Array {
    type Item = Point2;
    type IntoIter = Point2Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Point2> for Point2Array {
    fn from_iter<T: IntoIterator<Item = Point2>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut pta = Self::with_capacity(lower);
        for pt in iter {
            pta.push(pt);
        }
        pta
    }
}

impl Extend<Point2> for Point2Array {
    fn extend<T: IntoIterator<Item = Point2>>(&mut self, iter: T) {
        for pt in iter {
            self.push(pt);
        }
    }
}

impl From<Vec<Point2>> for Point2Array {
    fn from(points: Vec<Point2>) -> Self {
        points.into_iter().collect()
    }
}
