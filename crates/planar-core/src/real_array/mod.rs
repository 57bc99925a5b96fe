//! RealArray - Numeric arrays
//!
//! A growable array of `f64` values. It is the storage behind each
//! coordinate axis of a [`Point2Array`](crate::Point2Array) and supplies the
//! generic element operations (append, delete, reorder, extremum search,
//! elementwise arithmetic, mean, sum-product) the point array is built on.

mod operations;
mod sort;

pub use sort::SortOrder;

use crate::error::{Error, Result};
use crate::number::parse_flexible_double;
use std::fmt;

/// Array of floating-point numbers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealArray {
    data: Vec<f64>,
}

impl RealArray {
    /// Create a new empty RealArray
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a RealArray with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a RealArray of `size` zeros
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0.0; size],
        }
    }

    /// Create a RealArray from a vector of values
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a RealArray from a slice of values
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Parse every token with the flexible double parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseNumber`] for the first token that is not a number.
    pub fn from_strings<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        tokens
            .iter()
            .map(|t| parse_flexible_double(t.as_ref()))
            .collect::<Result<Vec<f64>>>()
            .inspect_err(|e| log::trace!("from_strings: {e}"))
            .map(Self::from_vec)
    }

    /// Get the number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Get a value by index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn element_at(&self, index: usize) -> Result<f64> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Add a value to the end
    pub fn push(&mut self, val: f64) {
        self.data.push(val);
    }

    /// Set a value at index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn set(&mut self, index: usize, val: f64) -> Result<()> {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Remove a value at index, shifting later values down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Result<f64> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Append all values of `other`.
    pub fn append(&mut self, other: &RealArray) {
        self.data.extend_from_slice(&other.data);
    }

    /// Reverse the values in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Remove all values
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the underlying data as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get the underlying data as a mutable slice
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get the underlying vector (consuming self)
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate over the values
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.data.iter().copied()
    }
}

impl From<Vec<f64>> for RealArray {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<f64> for RealArray {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for RealArray {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        self.data.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RealArray {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Space-separated values.
impl fmt::Display for RealArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{val}")?;
        }
        Ok(())
    }
}
