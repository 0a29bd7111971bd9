//! Uniform color tint.
//!
//! [`apply_color`] blends one color under every pixel, weighting each color by
//! its alpha. Only color channels change; the output alpha is always the
//! source pixel's own alpha.
//!
//! ```text
//! a3 = a_tint + a_px
//! C' = (a_tint * C_tint + a_px * C_px) / a3     (integer, truncating)
//! A' = a_px
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//! use pixops_ops::tint::apply_color;
//!
//! let red = PixelBuffer::filled(2, 2, Color::opaque(255, 0, 0));
//! let tinted = apply_color(&red, Color::opaque(0, 0, 255)).unwrap();
//! assert_eq!(tinted.pixel(0, 0), Color::new(127, 0, 127, 255));
//! ```

use crate::parallel::fill_rows;
use crate::{OpsError, OpsResult};
use pixops_core::{Color, PixelBuffer, CHANNELS};
use tracing::{debug, trace};

/// Alpha-weighted mean of two channel values. `a3` must equal `a1 + a2` and be non-zero.
#[inline]
pub(crate) fn mix_channel(a1: u32, c1: u8, a2: u32, c2: u8, a3: u32) -> u8 {
    // A weighted mean of two bytes never exceeds 255.
    ((a1 * c1 as u32 + a2 * c2 as u32) / a3) as u8
}

/// Blends `tint` under a single pixel.
///
/// Returns `None` when both alphas are zero.
///
/// ```rust
/// use pixops_core::Color;
/// use pixops_ops::tint::tint_pixel;
///
/// let out = tint_pixel(Color::new(0, 0, 255, 255), Color::new(255, 0, 0, 255));
/// assert_eq!(out, Some(Color::new(127, 0, 127, 255)));
/// assert_eq!(tint_pixel(Color::TRANSPARENT, Color::TRANSPARENT), None);
/// ```
#[inline]
pub fn tint_pixel(tint: Color, px: Color) -> Option<Color> {
    let a1 = tint.a as u32;
    let a2 = px.a as u32;
    let a3 = a1 + a2;
    if a3 == 0 {
        return None;
    }
    Some(Color::new(
        mix_channel(a1, tint.r, a2, px.r, a3),
        mix_channel(a1, tint.g, a2, px.g, a3),
        mix_channel(a1, tint.b, a2, px.b, a3),
        px.a,
    ))
}

/// Tints every pixel of `src` with `tint`.
///
/// # Errors
///
/// Returns [`OpsError::DivideByZero`] with the first offending coordinate when
/// `tint` is fully transparent and `src` has a fully transparent pixel. The
/// check runs before the output is allocated.
pub fn apply_color(src: &PixelBuffer, tint: Color) -> OpsResult<PixelBuffer> {
    let (w, h) = src.dimensions();
    debug!(width = w, height = h, %tint, "apply_color");

    if tint.is_transparent() {
        if let Some((x, y, _)) = src.pixels().find(|(_, _, px)| px.is_transparent()) {
            return Err(OpsError::DivideByZero { x, y });
        }
        trace!("transparent tint over fully weighted buffer");
    }

    let mut dst = PixelBuffer::new(w, h);
    let row_len = dst.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        let src_row = src.row(y as u32);
        for (d, s) in row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS))
        {
            // Validated above: a3 > 0 for every pixel.
            let out = tint_pixel(tint, Color::from_slice(s)).unwrap_or(Color::TRANSPARENT);
            d.copy_from_slice(&out.to_array());
        }
    });
    Ok(dst)
}
