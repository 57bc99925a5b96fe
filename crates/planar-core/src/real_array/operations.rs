//! RealArray arithmetic, reductions and sub-ranges.

use super::RealArray;
use crate::error::{Error, Result};
use crate::number::round_to_places;

impl RealArray {
    // ====================================================================
    // Elementwise arithmetic
    // ====================================================================

    /// Elementwise sum of two arrays of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSize`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::RealArray;
    ///
    /// let a = RealArray::from_slice(&[1.0, 2.0]);
    /// let b = RealArray::from_slice(&[10.0, 20.0]);
    /// assert_eq!(a.plus(&b).unwrap().as_slice(), &[11.0, 22.0]);
    /// ```
    pub fn plus(&self, other: &RealArray) -> Result<RealArray> {
        self.check_same_len(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a + b).collect())
    }

    /// Return a copy with every value multiplied by `factor`.
    pub fn multiply_by(&self, factor: f64) -> RealArray {
        self.iter().map(|v| v * factor).collect()
    }

    /// Round every value in place to `places` decimal digits.
    ///
    /// Halves round away from zero.
    pub fn round_to(&mut self, places: i32) {
        for val in self.as_slice_mut() {
            *val = round_to_places(*val, places);
        }
    }

    // ====================================================================
    // Reductions
    // ====================================================================

    /// Sum of all values (0 for an empty array).
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Arithmetic mean, or `None` if empty.
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.sum() / self.len() as f64)
        }
    }

    /// Dot product `sum(self[i] * other[i])`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSize`] if the lengths differ.
    pub fn sum_product(&self, other: &RealArray) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    // ====================================================================
    // Sub-ranges
    // ====================================================================

    /// Copy of the values in `[start, end]` (both inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end` or `end >= len`.
    pub fn sub_array(&self, start: usize, end: usize) -> Result<RealArray> {
        if start > end || end >= self.len() {
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(RealArray::from_slice(&self.as_slice()[start..=end]))
    }

    fn check_same_len(&self, other: &RealArray) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::IncompatibleSize {
                x_len: self.len(),
                y_len: other.len(),
            });
        }
        Ok(())
    }
}
