//! Transform2 - affine 2D transforms
//!
//! A transform is stored as the six free coefficients of a 3x3 matrix
//! whose last row is `[0, 0, 1]`:
//!
//! ```text
//! x' = coeffs[0]*x + coeffs[1]*y + coeffs[2]
//! y' = coeffs[3]*x + coeffs[4]*y + coeffs[5]
//! ```

use crate::error::{Error, Result};
use crate::point2::Point2;

/// 2D affine transformation (6 coefficients)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    /// Coefficients [a, b, tx, c, d, ty]
    coeffs: [f64; 6],
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2 {
    /// Create the identity transformation
    pub fn identity() -> Self {
        Self::from_coeffs([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Create from raw coefficients `[a, b, tx, c, d, ty]`
    pub fn from_coeffs(coeffs: [f64; 6]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f64; 6] {
        &self.coeffs
    }

    /// Create a translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::from_coeffs([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    /// Create a scaling about the origin
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_coeffs([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Create a counter-clockwise rotation about the origin.
    ///
    /// `angle` is in radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_coeffs([cos, -sin, 0.0, sin, cos, 0.0])
    }

    /// Create a counter-clockwise rotation about `center`.
    pub fn rotation_about(center: Point2, angle: f64) -> Self {
        Self::translation(center.x, center.y)
            .compose(&Self::rotation(angle))
            .compose(&Self::translation(-center.x, -center.y))
    }

    /// Compose two transforms: the result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let [a1, b1, tx1, c1, d1, ty1] = self.coeffs;
        let [a2, b2, tx2, c2, d2, ty2] = other.coeffs;
        Self::from_coeffs([
            a1 * a2 + b1 * c2,
            a1 * b2 + b1 * d2,
            a1 * tx2 + b1 * ty2 + tx1,
            c1 * a2 + d1 * c2,
            c1 * b2 + d1 * d2,
            c1 * tx2 + d1 * ty2 + ty1,
        ])
    }

    /// Compute the inverse transformation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the linear part has zero determinant.
    pub fn inverse(&self) -> Result<Self> {
        let [a, b, tx, c, d, ty] = self.coeffs;
        let det = a * d - b * c;
        if det == 0.0 || !det.is_finite() {
            return Err(Error::SingularMatrix);
        }
        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        Ok(Self::from_coeffs([
            ia,
            ib,
            -(ia * tx + ib * ty),
            ic,
            id,
            -(ic * tx + id * ty),
        ]))
    }

    /// Transform a point
    pub fn apply(&self, pt: Point2) -> Point2 {
        let [a, b, tx, c, d, ty] = self.coeffs;
        Point2::new(a * pt.x + b * pt.y + tx, c * pt.x + d * pt.y + ty)
    }
}
