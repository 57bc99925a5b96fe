//! Point2Array sorting and sub-arrays.

use super::Point2Array;
use crate::error::{Error, Result};
use crate::real_array::{RealArray, SortOrder};

/// Which coordinate to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Sort by x coordinate
    X,
    /// Sort by y coordinate
    Y,
}

impl Axis {
    /// Convert an integer axis selector: 0 is x, 1 is y.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for any other value.
    pub fn from_index(index: i32) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            _ => Err(Error::InvalidParameter(format!(
                "axis must be 0 (x) or 1 (y), got {index}"
            ))),
        }
    }
}

impl Point2Array {
    /// Sort in place so the chosen coordinate is non-decreasing.
    ///
    /// Points keep their x/y pairing. Points with equal keys keep their
    /// original relative order.
    pub fn sort_ascending(&mut self, axis: Axis) {
        self.sort_by_axis(axis, SortOrder::Increasing);
    }

    /// Sort in place so the chosen coordinate is non-increasing.
    ///
    /// Points keep their x/y pairing. Points with equal keys keep their
    /// original relative order.
    pub fn sort_descending(&mut self, axis: Axis) {
        self.sort_by_axis(axis, SortOrder::Decreasing);
    }

    /// Index permutation that sorts the chosen coordinate in `order`.
    pub fn sort_index(&self, axis: Axis, order: SortOrder) -> Vec<usize> {
        self.axis_array(axis).index_sort(order)
    }

    fn sort_by_axis(&mut self, axis: Axis, order: SortOrder) {
        log::debug!("sorting {} points on {axis:?} ({order:?})", self.len());
        let index = self.sort_index(axis, order);
        // `index` is a permutation of 0..len, so neither reorder fails.
        if let (Ok(x), Ok(y)) = (self.x.reordered(&index), self.y.reordered(&index)) {
            self.x = x;
            self.y = y;
        }
    }

    fn axis_array(&self, axis: Axis) -> &RealArray {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Copy of the points from `start` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is not a valid index.
    pub fn create_sub_array(&self, start: usize) -> Result<Point2Array> {
        let end = self.len().checked_sub(1).ok_or(Error::InvalidRange {
            start,
            end: 0,
            len: 0,
        })?;
        self.create_sub_array_range(start, end)
    }

    /// Copy of the points in `[start, end]` (both inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end` or `end >= len`.
    pub fn create_sub_array_range(&self, start: usize, end: usize) -> Result<Point2Array> {
        let x = self.x.sub_array(start, end)?;
        let y = self.y.sub_array(start, end)?;
        Point2Array::from_parts(x, y)
    }
}
