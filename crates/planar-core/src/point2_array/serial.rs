//! Text parsing and emission for Point2Array
//!
//! # Delimited pairs
//!
//! ```text
//! x0<d>y0<d>x1<d>y1 ...
//! ```
//!
//! `<d>` is a caller-supplied regular expression such as `","` or `",| "`.
//!
//! # Bracketed coordinates
//!
//! ```text
//! [(x0,y0)(x1,y1)...]
//! ```
//!
//! Numbers are written with `f64`'s `Display`, so re-parsing the bracketed
//! form reproduces every finite coordinate exactly. The flat form
//! `x0 y0 x1 y1 ...` uses the same number format.
//!
//! Malformed text is not an error for the `create_from_*` parsers: they
//! return `None` and log the reason at trace level.

use super::Point2Array;
use crate::error::{Error, Result};
use crate::number::parse_flexible_double;
use crate::point2::Point2;
use crate::real_array::RealArray;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

impl Point2Array {
    /// Parse delimiter-separated `x, y` pairs.
    ///
    /// The text is trimmed and split on `delimiter`, a regular expression;
    /// trailing empty tokens are dropped. Blank text, an odd number of tokens
    /// or any token that is not a number gives `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiter`] if `delimiter` is not a valid
    /// regular expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{Point2, Point2Array};
    ///
    /// let pta = Point2Array::create_from_pairs("1,2,3,4", ",").unwrap().unwrap();
    /// assert_eq!(pta.to_vec(), vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);
    ///
    /// assert!(Point2Array::create_from_pairs("1,2,3", ",").unwrap().is_none());
    /// ```
    pub fn create_from_pairs(text: &str, delimiter: &str) -> Result<Option<Self>> {
        let pattern =
            Regex::new(delimiter).map_err(|e| Error::InvalidDelimiter(e.to_string()))?;
        Ok(Self::create_from_pairs_with(text, &pattern))
    }

    /// Same as [`create_from_pairs`](Self::create_from_pairs) with a
    /// precompiled delimiter.
    pub fn create_from_pairs_with(text: &str, delimiter: &Regex) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            log::trace!("no pairs in blank text");
            return None;
        }

        let mut tokens: Vec<&str> = delimiter.split(text).collect();
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        if tokens.len() % 2 != 0 {
            log::debug!("odd number of tokens ({}) in pairs text", tokens.len());
            return None;
        }

        match RealArray::from_strings(&tokens) {
            Ok(values) => Self::create_from_real_pairs(&values).ok(),
            Err(e) => {
                log::trace!("bad pair token: {e}");
                None
            }
        }
    }

    /// Build from a flat sequence `x0, y0, x1, y1, ...`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OddLength`] if the sequence has an odd number of values.
    pub fn create_from_real_pairs(values: &RealArray) -> Result<Self> {
        let values = values.as_slice();
        if values.len() % 2 != 0 {
            return Err(Error::OddLength(values.len()));
        }
        Ok(values
            .chunks_exact(2)
            .map(|pair| Point2::new(pair[0], pair[1]))
            .collect())
    }

    /// Parse the bracketed form `[(x0,y0)(x1,y1)...]`.
    ///
    /// Whitespace and a single comma between groups are tolerated. Any
    /// malformed group discards the whole result. `"[]"` is an empty array.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{Point2, Point2Array};
    ///
    /// let pta = Point2Array::create_from_coords("[(1.0,2.0)(3.0,-4.5)]").unwrap();
    /// assert_eq!(pta.get(1).unwrap(), Point2::new(3.0, -4.5));
    ///
    /// assert!(Point2Array::create_from_coords("[(1,2)(bad,4)]").is_none());
    /// ```
    pub fn create_from_coords(coords: &str) -> Option<Self> {
        match parse_coords(coords) {
            Ok(pta) => Some(pta),
            Err(e) => {
                log::trace!("bad coords: {e}");
                None
            }
        }
    }

    /// Flat form `x0 y0 x1 y1 ...`, single-space separated.
    pub fn to_flat_string(&self) -> String {
        let mut s = String::new();
        for (i, pt) in self.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            s.push_str(&format!("{} {}", pt.x, pt.y));
        }
        s
    }
}

fn parse_coords(coords: &str) -> Result<Point2Array> {
    let body = coords
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| Error::ParseCoords("missing outer brackets".to_string()))?;

    let mut pta = Point2Array::new();
    let mut rest = body.trim_start();
    while !rest.is_empty() {
        let group = rest
            .strip_prefix('(')
            .ok_or_else(|| Error::ParseCoords(format!("expected '(' at {rest:?}")))?;
        let close = group
            .find(')')
            .ok_or_else(|| Error::ParseCoords(format!("unclosed group at {rest:?}")))?;
        let (inner, tail) = group.split_at(close);
        let (xs, ys) = inner
            .split_once(',')
            .ok_or_else(|| Error::ParseCoords(format!("expected 'x,y' in ({inner})")))?;
        pta.push(Point2::new(parse_coord(xs)?, parse_coord(ys)?));

        rest = tail[1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
            if rest.is_empty() {
                return Err(Error::ParseCoords("trailing ','".to_string()));
            }
        }
    }
    Ok(pta)
}

// Digits, '.', '+' and '-' only, then the flexible parser decides.
fn parse_coord(token: &str) -> Result<f64> {
    let token = token.trim();
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
    {
        return Err(Error::ParseCoords(format!("bad number {token:?}")));
    }
    parse_flexible_double(token).map_err(|_| Error::ParseCoords(format!("bad number {token:?}")))
}

/// Bracketed form `[(x0,y0)(x1,y1)...]`.
impl fmt::Display for Point2Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for pt in self.iter() {
            write!(f, "{pt}")?;
        }
        f.write_str("]")
    }
}

/// Strict counterpart of [`Point2Array::create_from_coords`] that reports
/// why the text was rejected.
impl FromStr for Point2Array {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_coords(s)
    }
}
