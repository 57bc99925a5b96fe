//! Extremum search, index sorting and reordering for RealArray.

use super::RealArray;
use crate::error::Result;

/// Sort order for index sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Increasing,
    /// Largest first.
    Decreasing,
}

impl RealArray {
    /// Index of the smallest value; the first one wins ties.
    ///
    /// Returns `None` if empty. NaN values are never selected unless every
    /// value is NaN.
    pub fn index_of_smallest(&self) -> Option<usize> {
        self.index_of_extreme(|candidate, best| candidate < best)
    }

    /// Index of the largest value; the first one wins ties.
    ///
    /// Returns `None` if empty. NaN values are never selected unless every
    /// value is NaN.
    pub fn index_of_largest(&self) -> Option<usize> {
        self.index_of_extreme(|candidate, best| candidate > best)
    }

    // `better` must be strict so that equal values keep the earlier index.
    fn index_of_extreme(&self, better: impl Fn(f64, f64) -> bool) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, val) in self.iter().enumerate() {
            best = match best {
                None => Some((i, val)),
                Some((_, b)) if b.is_nan() && !val.is_nan() => Some((i, val)),
                Some((_, b)) if better(val, b) => Some((i, val)),
                keep => keep,
            };
        }
        best.map(|(i, _)| i)
    }

    /// Permutation of indices that visits the values in `order`.
    ///
    /// The sort is stable: equal values keep their original relative order
    /// in both directions. Values are compared with [`f64::total_cmp`].
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{RealArray, SortOrder};
    ///
    /// let ra = RealArray::from_slice(&[3.0, 1.0, 2.0]);
    /// assert_eq!(ra.index_sort(SortOrder::Increasing), vec![1, 2, 0]);
    /// assert_eq!(ra.index_sort(SortOrder::Decreasing), vec![0, 2, 1]);
    /// ```
    pub fn index_sort(&self, order: SortOrder) -> Vec<usize> {
        let data = self.as_slice();
        let mut index: Vec<usize> = (0..data.len()).collect();
        match order {
            SortOrder::Increasing => index.sort_by(|&a, &b| data[a].total_cmp(&data[b])),
            SortOrder::Decreasing => index.sort_by(|&a, &b| data[b].total_cmp(&data[a])),
        }
        index
    }

    /// New array with `result[i] = self[index[i]]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if any index is out of bounds.
    pub fn reordered(&self, index: &[usize]) -> Result<RealArray> {
        index.iter().map(|&i| self.element_at(i)).collect()
    }

    /// Sorted copy of the values.
    pub fn sorted(&self, order: SortOrder) -> RealArray {
        self.index_sort(order)
            .into_iter()
            .map(|i| self.as_slice()[i])
            .collect()
    }
}
