//! Nearest-neighbor scaling.
//!
//! Output size is `(floor(w * x), floor(h * y))`. Each output pixel copies the
//! source pixel at `(floor(x / x_ratio), floor(y / y_ratio))`, clamped to the
//! last column/row. No interpolation or filtering is applied.
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer, ScaleFactor};
//! use pixops_ops::resize::scale;
//!
//! let src = PixelBuffer::from_fn(4, 4, |x, y| Color::opaque(x as u8, y as u8, 0));
//! let half = scale(&src, ScaleFactor::uniform(0.5).unwrap()).unwrap();
//! assert_eq!(half.dimensions(), (2, 2));
//! assert_eq!(half.pixel(1, 1), Color::opaque(2, 2, 0));
//! ```

use crate::parallel::fill_rows;
use crate::OpsResult;
use pixops_core::{PixelBuffer, ScaleFactor, CHANNELS};
use tracing::{debug, trace};

/// Scales `src` by `factor`.
///
/// Ratios that floor an extent to zero yield an empty buffer, not an error.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`](crate::OpsError::InvalidDimensions)
/// if the scaled size does not fit in `u32` or in memory addressing.
pub fn scale(src: &PixelBuffer, factor: ScaleFactor) -> OpsResult<PixelBuffer> {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = factor.output_size(src_w, src_h)?;
    debug!(
        src_width = src_w,
        src_height = src_h,
        x_ratio = factor.x(),
        y_ratio = factor.y(),
        dst_width = dst_w,
        dst_height = dst_h,
        "scale"
    );

    let mut dst = PixelBuffer::try_new(dst_w, dst_h)?;
    if dst.is_empty() {
        trace!("scaled extent is zero");
        return Ok(dst);
    }

    // Column lookup is shared by every row.
    let x_map: Vec<usize> = (0..dst_w)
        .map(|x| factor.source_x(x, src_w) as usize * CHANNELS)
        .collect();

    let row_len = dst.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        let src_row = src.row(factor.source_y(y as u32, src_h));
        for (d, &sx) in row.chunks_exact_mut(CHANNELS).zip(&x_map) {
            d.copy_from_slice(&src_row[sx..sx + CHANNELS]);
        }
    });

    Ok(dst)
}

/// Scales `src` by raw ratios.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`](crate::OpsError::InvalidParameter)
/// if either ratio is not finite or not strictly positive, otherwise as
/// [`scale`].
///
/// ```rust
/// use pixops_core::PixelBuffer;
/// use pixops_ops::resize::scale_by;
///
/// let src = PixelBuffer::new(3, 5);
/// assert_eq!(scale_by(&src, 2.0, 0.5).unwrap().dimensions(), (6, 2));
/// assert!(scale_by(&src, -1.0, 1.0).is_err());
/// ```
pub fn scale_by(src: &PixelBuffer, x_ratio: f64, y_ratio: f64) -> OpsResult<PixelBuffer> {
    scale(src, ScaleFactor::new(x_ratio, y_ratio)?)
}
