//! Mask-based layer compositing.
//!
//! Both operations copy the base buffer and then rewrite the region covered by
//! the mask, anchored at the origin. Pixels outside the mask's extent keep the
//! base value. A mask wider or taller than its base is rejected up front.
//!
//! # Operations
//!
//! - [`fill_mask`] - Mask fills only the fully transparent holes of the base
//! - [`apply_mask`] - Alpha-weighted mix of mask and base, keeping the stronger alpha
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//! use pixops_ops::mask::{apply_mask, fill_mask};
//!
//! let mut base = PixelBuffer::filled(2, 1, Color::opaque(255, 0, 0));
//! base.set_pixel(1, 0, Color::TRANSPARENT);
//! let mask = PixelBuffer::filled(2, 1, Color::opaque(0, 0, 255));
//!
//! let filled = fill_mask(&base, &mask).unwrap();
//! assert_eq!(filled.pixel(0, 0), Color::opaque(255, 0, 0));
//! assert_eq!(filled.pixel(1, 0), Color::opaque(0, 0, 255));
//!
//! let mixed = apply_mask(&base, &mask).unwrap();
//! assert_eq!(mixed.pixel(0, 0), Color::opaque(127, 0, 127));
//! ```

use crate::parallel::fill_rows;
use crate::tint::mix_channel;
use crate::{OpsError, OpsResult};
use pixops_core::{Color, PixelBuffer, CHANNELS};
use tracing::debug;

/// Resolves one fill-mask pixel: the mask shows through only where the base is fully transparent.
#[inline]
pub fn fill_pixel(base: Color, mask: Color) -> Color {
    if base.is_transparent() { mask } else { base }
}

/// Resolves one apply-mask pixel.
///
/// The mask contributes `(c1, a1)`, the base `(c2, a2)`. Color channels are
/// the alpha-weighted mean, truncated. Output alpha is `max(a1, a2)`, not the
/// Porter-Duff sum. Two fully transparent inputs give `(0, 0, 0, 0)`.
///
/// ```rust
/// use pixops_core::Color;
/// use pixops_ops::mask::apply_pixel;
///
/// let out = apply_pixel(Color::new(200, 0, 0, 100), Color::new(0, 0, 100, 50));
/// assert_eq!(out, Color::new(133, 0, 33, 100));
/// ```
#[inline]
pub fn apply_pixel(mask: Color, base: Color) -> Color {
    let a1 = mask.a as u32;
    let a2 = base.a as u32;
    let a3 = a1 + a2;
    if a3 == 0 {
        return Color::TRANSPARENT;
    }
    Color::new(
        mix_channel(a1, mask.r, a2, base.r, a3),
        mix_channel(a1, mask.g, a2, base.g, a3),
        mix_channel(a1, mask.b, a2, base.b, a3),
        mask.a.max(base.a),
    )
}

/// Rejects a mask that would index past the base.
fn ensure_mask_fits(base: &PixelBuffer, mask: &PixelBuffer) -> OpsResult<()> {
    if base.contains(mask.width(), mask.height()) {
        return Ok(());
    }
    Err(OpsError::DimensionMismatch {
        base_width: base.width(),
        base_height: base.height(),
        mask_width: mask.width(),
        mask_height: mask.height(),
    })
}

/// Copies `base` and rewrites the mask-covered region with `resolve(base_px, mask_px)`.
fn composite<F>(base: &PixelBuffer, mask: &PixelBuffer, resolve: F) -> PixelBuffer
where
    F: Fn(Color, Color) -> Color + Send + Sync,
{
    let mut dst = base.clone();
    let row_len = dst.row_len();
    let mask_h = mask.height() as usize;
    let mask_len = mask.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        if y >= mask_h {
            return;
        }
        let mask_row = mask.row(y as u32);
        for (d, m) in row[..mask_len]
            .chunks_exact_mut(CHANNELS)
            .zip(mask_row.chunks_exact(CHANNELS))
        {
            let out = resolve(Color::from_slice(d), Color::from_slice(m));
            d.copy_from_slice(&out.to_array());
        }
    });
    dst
}

/// Fills the transparent holes of `base` from `mask`.
///
/// # Errors
///
/// Returns [`OpsError::DimensionMismatch`] if `mask` is wider or taller than `base`.
pub fn fill_mask(base: &PixelBuffer, mask: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!(
        base_width = base.width(),
        base_height = base.height(),
        mask_width = mask.width(),
        mask_height = mask.height(),
        "fill_mask"
    );
    ensure_mask_fits(base, mask)?;
    Ok(composite(base, mask, fill_pixel))
}

/// Mixes `mask` into `base` with [`apply_pixel`].
///
/// # Errors
///
/// Returns [`OpsError::DimensionMismatch`] if `mask` is wider or taller than `base`.
pub fn apply_mask(base: &PixelBuffer, mask: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!(
        base_width = base.width(),
        base_height = base.height(),
        mask_width = mask.width(),
        mask_height = mask.height(),
        "apply_mask"
    );
    ensure_mask_fits(base, mask)?;
    Ok(composite(base, mask, |b, m| apply_pixel(m, b)))
}
