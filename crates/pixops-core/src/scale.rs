//! Non-uniform scale ratios.
//!
//! A [`ScaleFactor`] holds independent horizontal and vertical ratios, both
//! finite and strictly positive. Output extents are floored and nearest
//! neighbor source indices are floored then clamped to the last valid index.

use crate::{Error, Result};

/// Pair of positive scale ratios `(x, y)`.
///
/// # Example
///
/// ```rust
/// use pixops_core::ScaleFactor;
///
/// let f = ScaleFactor::new(0.5, 2.0).unwrap();
/// assert_eq!(f.output_size(5, 3).unwrap(), (2, 6));
/// assert!(ScaleFactor::new(0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    x: f64,
    y: f64,
}

fn check_ratio(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid_parameter(name, value, "must be finite and > 0"))
    }
}

impl ScaleFactor {
    /// Creates a scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either ratio is not finite or
    /// not strictly positive.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: check_ratio("x_ratio", x)?,
            y: check_ratio("y_ratio", y)?,
        })
    }

    /// Creates a scale factor with the same ratio on both axes.
    pub fn uniform(ratio: f64) -> Result<Self> {
        Self::new(ratio, ratio)
    }

    /// Horizontal ratio.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical ratio.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `(floor(width * x), floor(height * y))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either extent exceeds `u32`.
    pub fn output_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        let w = (width as f64 * self.x).floor();
        let h = (height as f64 * self.y).floor();
        if w > u32::MAX as f64 || h > u32::MAX as f64 {
            return Err(Error::invalid_dimensions(
                w as u64,
                h as u64,
                "scaled size exceeds u32",
            ));
        }
        Ok((w as u32, h as u32))
    }

    /// Maps destination column `dst` back to a source column.
    ///
    /// `src_len` must be non-zero.
    #[inline]
    pub fn source_x(&self, dst: u32, src_len: u32) -> u32 {
        source_index(dst, self.x, src_len)
    }

    /// Maps destination row `dst` back to a source row.
    ///
    /// `src_len` must be non-zero.
    #[inline]
    pub fn source_y(&self, dst: u32, src_len: u32) -> u32 {
        source_index(dst, self.y, src_len)
    }
}

/// `floor(dst / ratio)`, clamped to `src_len - 1`.
#[inline]
fn source_index(dst: u32, ratio: f64, src_len: u32) -> u32 {
    let s = (dst as f64 / ratio).floor();
    // `as` saturates, so huge quotients land on u32::MAX before the clamp.
    (s as u32).min(src_len.saturating_sub(1))
}
