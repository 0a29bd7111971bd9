//! Geometric transformation operations.
//!
//! Mirror flips and lossless quarter-turn rotations. All functions borrow the
//! source and return a new buffer; none can fail.
//!
//! # Operations
//!
//! - [`flip_x`] - Horizontal flip (left-right mirror)
//! - [`flip_y`] - Vertical flip (top-bottom mirror)
//! - [`rotate_90_cw`], [`rotate_90_ccw`], [`rotate_180`] - Quarter turns
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//! use pixops_ops::transform::flip_x;
//!
//! let src = PixelBuffer::from_fn(3, 1, |x, _| Color::opaque(x as u8, 0, 0));
//! let flipped = flip_x(&src);
//! assert_eq!(flipped.pixel(0, 0), Color::opaque(2, 0, 0));
//! assert_eq!(flipped.pixel(2, 0), Color::opaque(0, 0, 0));
//! assert_eq!(flip_x(&flipped), src);
//! ```

use crate::parallel::fill_rows;
use pixops_core::{PixelBuffer, CHANNELS};
use tracing::debug;

/// Flips horizontally: `dst[x, y] = src[w - 1 - x, y]`.
pub fn flip_x(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = src.dimensions();
    debug!(width = w, height = h, "flip_x");

    let mut dst = PixelBuffer::new(w, h);
    let row_len = dst.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        let src_row = src.row(y as u32);
        for (d, s) in row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS).rev())
        {
            d.copy_from_slice(s);
        }
    });
    dst
}

/// Flips vertically: `dst[x, y] = src[x, h - 1 - y]`.
pub fn flip_y(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = src.dimensions();
    debug!(width = w, height = h, "flip_y");

    let mut dst = PixelBuffer::new(w, h);
    let row_len = dst.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        row.copy_from_slice(src.row(h - 1 - y as u32));
    });
    dst
}

/// Writes `dst[x, y] = src[map(x, y)]` for every output pixel.
fn remap<F>(src: &PixelBuffer, dst_w: u32, dst_h: u32, map: F) -> PixelBuffer
where
    F: Fn(u32, u32) -> (u32, u32) + Send + Sync,
{
    let mut dst = PixelBuffer::new(dst_w, dst_h);
    let row_len = dst.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        for (x, d) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let (sx, sy) = map(x as u32, y as u32);
            d.copy_from_slice(&src.pixel(sx, sy).to_array());
        }
    });
    dst
}

/// Rotates 90 degrees clockwise. Output is `height x width`.
///
/// ```rust
/// use pixops_core::{Color, PixelBuffer};
/// use pixops_ops::transform::rotate_90_cw;
///
/// let src = PixelBuffer::new(4, 2);
/// assert_eq!(rotate_90_cw(&src).dimensions(), (2, 4));
/// ```
pub fn rotate_90_cw(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = src.dimensions();
    debug!(width = w, height = h, "rotate_90_cw");
    remap(src, h, w, |x, y| (y, h - 1 - x))
}

/// Rotates 90 degrees counter-clockwise. Output is `height x width`.
pub fn rotate_90_ccw(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = src.dimensions();
    debug!(width = w, height = h, "rotate_90_ccw");
    remap(src, h, w, |x, y| (w - 1 - y, x))
}

/// Rotates 180 degrees.
pub fn rotate_180(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = src.dimensions();
    debug!(width = w, height = h, "rotate_180");
    remap(src, w, h, |x, y| (w - 1 - x, h - 1 - y))
}
