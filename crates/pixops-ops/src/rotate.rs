//! Arbitrary-angle rotation.
//!
//! Rotation sits behind the [`Rotator`] trait so the resampling kernel can be
//! swapped without touching the compositing math. The default
//! [`CubicRotator`] works as follows:
//!
//! 1. **Fast path**: multiples of 90 degrees use the lossless quarter turns
//!    from [`crate::transform`].
//! 2. **Bounds**: the output is the rotated source's bounding box, rounded up.
//! 3. **Inverse mapping**: each output pixel center is rotated back into the
//!    source around the image centers.
//! 4. **Bicubic sampling**: Catmull-Rom weights over a 4x4 neighborhood in
//!    premultiplied alpha, edge taps clamped to the source.
//! 5. **Background**: output pixels that map outside the source take the
//!    background color, opaque black unless configured.
//!
//! Positive angles rotate counter-clockwise.
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//! use pixops_ops::rotate::{CubicRotator, Rotator};
//!
//! let src = PixelBuffer::filled(4, 4, Color::WHITE);
//! let out = CubicRotator::default().rotate(&src, 45.0).unwrap();
//! assert_eq!(out.dimensions(), (6, 6));
//! assert_eq!(out.pixel(0, 0), Color::BLACK);
//! ```

use crate::parallel::fill_rows;
use crate::transform::{rotate_180, rotate_90_ccw, rotate_90_cw};
use crate::{OpsError, OpsResult};
use pixops_core::{Color, PixelBuffer, CHANNELS};
use tracing::{debug, trace};

/// Tolerance for snapping angles to quarter turns.
const QUARTER_EPSILON: f64 = 1e-4;

/// Tolerance subtracted before rounding the bounding box up.
const BOUNDS_EPSILON: f64 = 1e-6;

/// Rotation strategy: rotates a buffer by `degrees`, counter-clockwise.
///
/// Implementations return a new buffer sized to the rotated bounding box and
/// must not modify the source. A zero-area source rotated by a quarter turn
/// keeps its swapped extents (`0x3` becomes `3x0`); any other angle yields a
/// `0x0` buffer, since no source pixel exists to place in a bounding box.
pub trait Rotator: Send + Sync {
    /// Rotates `src` by `degrees`.
    fn rotate(&self, src: &PixelBuffer, degrees: f32) -> OpsResult<PixelBuffer>;
}

/// Bicubic rotator with a uniform background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicRotator {
    background: Color,
}

impl Default for CubicRotator {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
        }
    }
}

impl CubicRotator {
    /// Creates a rotator with an opaque black background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color used for output pixels not covered by the source.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Returns the background color.
    pub fn background(&self) -> Color {
        self.background
    }
}

impl Rotator for CubicRotator {
    fn rotate(&self, src: &PixelBuffer, degrees: f32) -> OpsResult<PixelBuffer> {
        if !degrees.is_finite() {
            return Err(OpsError::InvalidParameter(format!(
                "rotation angle must be finite, got {degrees}"
            )));
        }
        let (w, h) = src.dimensions();
        let deg = (degrees as f64).rem_euclid(360.0);
        debug!(width = w, height = h, degrees = deg, background = %self.background, "rotate");

        let quarter = (deg / 90.0).round();
        if (deg - quarter * 90.0).abs() < QUARTER_EPSILON {
            trace!(quarter, "quarter-turn fast path");
            return Ok(match quarter as i32 % 4 {
                0 => src.clone(),
                1 => rotate_90_ccw(src),
                2 => rotate_180(src),
                _ => rotate_90_cw(src),
            });
        }

        if src.is_empty() {
            return Ok(PixelBuffer::empty());
        }
        rotate_cubic(src, deg.to_radians(), self.background)
    }
}

/// Rotates `src` with the default [`CubicRotator`].
///
/// ```rust
/// use pixops_core::{Color, PixelBuffer};
/// use pixops_ops::rotate::rotate;
///
/// let src = PixelBuffer::from_pixels(2, 1, &[Color::WHITE, Color::BLACK]).unwrap();
/// let up = rotate(&src, 90.0).unwrap();
/// assert_eq!(up.dimensions(), (1, 2));
/// assert_eq!(up.pixel(0, 0), Color::BLACK);
/// ```
pub fn rotate(src: &PixelBuffer, degrees: f32) -> OpsResult<PixelBuffer> {
    CubicRotator::default().rotate(src, degrees)
}

/// Catmull-Rom weights for the taps at offsets -1, 0, 1, 2 of fraction `t`.
#[inline]
fn catmull_rom(t: f64) -> [f64; 4] {
    [
        ((-0.5 * t + 1.0) * t - 0.5) * t,
        (1.5 * t - 2.5) * t * t + 1.0,
        ((-1.5 * t + 2.0) * t + 0.5) * t,
        (0.5 * t - 0.5) * t * t,
    ]
}

/// Four clamped tap indices around `floor(s)`.
#[inline]
fn taps(base: i64, len: u32) -> [u32; 4] {
    let max = len as i64 - 1;
    [
        (base - 1).clamp(0, max) as u32,
        base.clamp(0, max) as u32,
        (base + 1).clamp(0, max) as u32,
        (base + 2).clamp(0, max) as u32,
    ]
}

/// Samples `src` at pixel-center coordinates `(sx, sy)`.
fn sample_bicubic(src: &PixelBuffer, sx: f64, sy: f64) -> Color {
    let (w, h) = src.dimensions();
    let x0 = sx.floor();
    let y0 = sy.floor();
    let wx = catmull_rom(sx - x0);
    let wy = catmull_rom(sy - y0);
    let xs = taps(x0 as i64, w);
    let ys = taps(y0 as i64, h);

    // Premultiplied accumulation keeps transparent neighbors from bleeding color.
    let mut acc = [0.0f64; 4];
    for (&ty, &ky) in ys.iter().zip(&wy) {
        for (&tx, &kx) in xs.iter().zip(&wx) {
            let px = src.pixel(tx, ty);
            let k = kx * ky;
            let a = px.a as f64;
            acc[0] += k * px.r as f64 * a;
            acc[1] += k * px.g as f64 * a;
            acc[2] += k * px.b as f64 * a;
            acc[3] += k * a;
        }
    }

    let alpha = acc[3].clamp(0.0, 255.0);
    if alpha < 0.5 {
        return Color::TRANSPARENT;
    }
    let unpremultiply = |v: f64| (v / acc[3]).clamp(0.0, 255.0).round() as u8;
    Color::new(
        unpremultiply(acc[0]),
        unpremultiply(acc[1]),
        unpremultiply(acc[2]),
        alpha.round() as u8,
    )
}

/// Bounding box of a `src_w x src_h` rectangle rotated by `(sin, cos)`.
fn rotated_extent(src_w: f64, src_h: f64, sin: f64, cos: f64) -> OpsResult<(u32, u32)> {
    let w = (src_w * cos.abs() + src_h * sin.abs() - BOUNDS_EPSILON).ceil().max(1.0);
    let h = (src_w * sin.abs() + src_h * cos.abs() - BOUNDS_EPSILON).ceil().max(1.0);
    if w > u32::MAX as f64 || h > u32::MAX as f64 {
        return Err(OpsError::InvalidDimensions(format!("rotated bounds {w}x{h} exceed u32")));
    }
    Ok((w as u32, h as u32))
}

/// General-angle path. `radians` is counter-clockwise; `src` is non-empty.
fn rotate_cubic(src: &PixelBuffer, radians: f64, background: Color) -> OpsResult<PixelBuffer> {
    let (src_w, src_h) = (src.width() as f64, src.height() as f64);
    let (sin, cos) = radians.sin_cos();

    let (dst_w, dst_h) = rotated_extent(src_w, src_h, sin, cos)?;
    trace!(dst_width = dst_w, dst_height = dst_h, "rotated bounds");

    let (dst_cx, dst_cy) = (dst_w as f64 / 2.0, dst_h as f64 / 2.0);
    let (src_cx, src_cy) = (src_w / 2.0, src_h / 2.0);
    let bg = background.to_array();

    let mut dst = PixelBuffer::try_new(dst_w, dst_h)?;
    let row_len = dst.row_len();
    fill_rows(dst.data_mut(), row_len, |y, row| {
        let dy = y as f64 + 0.5 - dst_cy;
        for (x, d) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let dx = x as f64 + 0.5 - dst_cx;
            // Inverse of the y-down counter-clockwise rotation.
            let sx = dx * cos - dy * sin + src_cx - 0.5;
            let sy = dx * sin + dy * cos + src_cy - 0.5;
            if sx < -0.5 || sy < -0.5 || sx > src_w - 0.5 || sy > src_h - 0.5 {
                d.copy_from_slice(&bg);
            } else {
                d.copy_from_slice(&sample_bicubic(src, sx, sy).to_array());
            }
        }
    });
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            2,
            &[
                Color::opaque(255, 0, 0),
                Color::opaque(0, 255, 0),
                Color::opaque(0, 0, 255),
                Color::WHITE,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_catmull_rom_partition_of_unity() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.9] {
            let sum: f64 = catmull_rom(t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        assert_eq!(catmull_rom(0.0), [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quarter_turns_are_lossless() {
        let src = corners();
        assert_eq!(rotate(&src, 0.0).unwrap(), src);
        assert_eq!(rotate(&src, 360.0).unwrap(), src);
        assert_eq!(rotate(&src, 90.0).unwrap(), rotate_90_ccw(&src));
        assert_eq!(rotate(&src, -90.0).unwrap(), rotate_90_cw(&src));
        assert_eq!(rotate(&src, 270.0).unwrap(), rotate_90_cw(&src));
        assert_eq!(rotate(&src, 180.0).unwrap(), rotate_180(&src));
        assert_eq!(rotate(&src, 450.0).unwrap(), rotate_90_ccw(&src));
    }

    #[test]
    fn test_45_degrees_bounds_and_fill() {
        let src = PixelBuffer::filled(4, 4, Color::WHITE);
        let out = rotate(&src, 45.0).unwrap();
        // 4 * cos 45 + 4 * sin 45 = 5.657
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(out.pixel(0, 0), Color::BLACK);
        assert_eq!(out.pixel(5, 5), Color::BLACK);
        assert_eq!(out.pixel(3, 3), Color::WHITE);
        assert_eq!(out.pixel(2, 2), Color::WHITE);
    }

    #[test]
    fn test_custom_background() {
        let src = PixelBuffer::filled(4, 4, Color::WHITE);
        let rotator = CubicRotator::new().with_background(Color::TRANSPARENT);
        assert_eq!(rotator.background(), Color::TRANSPARENT);
        let out = rotator.rotate(&src, 30.0).unwrap();
        assert_eq!(out.pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_transparent_source_stays_transparent() {
        let src = PixelBuffer::filled(4, 4, Color::new(200, 100, 50, 0));
        let out = rotate(&src, 45.0).unwrap();
        assert_eq!(out.pixel(3, 3), Color::TRANSPARENT);
        assert_eq!(out.pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn test_non_square_bounds() {
        let src = PixelBuffer::filled(10, 2, Color::WHITE);
        let out = rotate(&src, 30.0).unwrap();
        // 10 cos30 + 2 sin30 = 9.66, 10 sin30 + 2 cos30 = 6.73
        assert_eq!(out.dimensions(), (10, 7));
    }

    #[test]
    fn test_invalid_angle() {
        let err = rotate(&corners(), f32::NAN).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
        assert!(rotate(&corners(), f32::INFINITY).is_err());
    }

    #[test]
    fn test_empty_source() {
        assert!(rotate(&PixelBuffer::empty(), 33.0).unwrap().is_empty());
        assert_eq!(rotate(&PixelBuffer::new(0, 3), 90.0).unwrap().dimensions(), (3, 0));
        assert_eq!(rotate(&PixelBuffer::new(0, 3), 30.0).unwrap().dimensions(), (0, 0));
    }

    #[test]
    fn test_huge_bounds_are_error() {
        let (sin, cos) = 45f64.to_radians().sin_cos();
        let max = u32::MAX as f64;
        let err = rotated_extent(max, max, sin, cos).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
        assert_eq!(rotated_extent(10.0, 2.0, 0.5, 0.75f64.sqrt()).unwrap(), (10, 7));
    }

    #[test]
    fn test_oversized_output_is_error() {
        // Bounds fit in u32, the pixel buffer does not fit in memory.
        let src = PixelBuffer::new(1, 1);
        let (sin, cos) = 45f64.to_radians().sin_cos();
        let err = rotated_extent(3.0e9, 3.0e9, sin, cos)
            .and_then(|(w, h)| Ok(PixelBuffer::try_new(w, h)?));
        assert!(matches!(err, Err(OpsError::InvalidDimensions(_))));
        assert!(rotate_cubic(&src, 0.3, Color::BLACK).is_ok());
    }

    #[test]
    fn test_rotator_is_object_safe() {
        let rotators: Vec<Box<dyn Rotator>> = vec![Box::new(CubicRotator::default())];
        let out = rotators[0].rotate(&corners(), 180.0).unwrap();
        assert_eq!(out.pixel(0, 0), Color::WHITE);
    }
}
