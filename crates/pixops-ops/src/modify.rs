//! Capability traits for entities that carry a pixel buffer.
//!
//! [`Renderable`] exposes the current buffer; [`Modifiable`] layers the pixel
//! operations on top as provided methods. An implementor only supplies
//! [`Modifiable::set_buffer`]. Each provided method computes the new buffer
//! from the current one and swaps it in only when the operation succeeds, so
//! a failed call leaves the entity unchanged.
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer, ScaleFactor};
//! use pixops_ops::{Modifiable, Renderable};
//!
//! let mut sprite = PixelBuffer::filled(4, 2, Color::opaque(255, 0, 0));
//! sprite.flip_x();
//! sprite.apply_color(Color::opaque(0, 0, 255)).unwrap();
//! sprite.scale(ScaleFactor::uniform(0.5).unwrap()).unwrap();
//! assert_eq!(Renderable::dimensions(&sprite), (2, 1));
//! assert_eq!(sprite.pixel(0, 0), Color::opaque(127, 0, 127));
//! ```

use crate::rotate::{CubicRotator, Rotator};
use crate::{mask, resize, tint, transform, OpsResult};
use pixops_core::{Color, PixelBuffer, ScaleFactor};

/// Anything that can hand out its current pixels.
pub trait Renderable {
    /// Current pixel buffer.
    fn buffer(&self) -> &PixelBuffer;

    /// `(width, height)` of the current buffer.
    fn dimensions(&self) -> (u32, u32) {
        self.buffer().dimensions()
    }
}

/// Pixel operations applied in place to a [`Renderable`].
pub trait Modifiable: Renderable + Clone {
    /// Replaces the current buffer.
    fn set_buffer(&mut self, buffer: PixelBuffer);

    /// Mirrors left-right.
    fn flip_x(&mut self) {
        let out = transform::flip_x(self.buffer());
        self.set_buffer(out);
    }

    /// Mirrors top-bottom.
    fn flip_y(&mut self) {
        let out = transform::flip_y(self.buffer());
        self.set_buffer(out);
    }

    /// Tints color channels, see [`tint::apply_color`].
    fn apply_color(&mut self, color: Color) -> OpsResult<()> {
        let out = tint::apply_color(self.buffer(), color)?;
        self.set_buffer(out);
        Ok(())
    }

    /// Returns an independent deep copy.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Fills transparent holes from `overlay`, see [`mask::fill_mask`].
    fn fill_mask(&mut self, overlay: &PixelBuffer) -> OpsResult<()> {
        let out = mask::fill_mask(self.buffer(), overlay)?;
        self.set_buffer(out);
        Ok(())
    }

    /// Mixes in `overlay`, see [`mask::apply_mask`].
    fn apply_mask(&mut self, overlay: &PixelBuffer) -> OpsResult<()> {
        let out = mask::apply_mask(self.buffer(), overlay)?;
        self.set_buffer(out);
        Ok(())
    }

    /// Rotates counter-clockwise with the default [`CubicRotator`].
    fn rotate(&mut self, degrees: f32) -> OpsResult<()> {
        self.rotate_with(&CubicRotator::default(), degrees)
    }

    /// Rotates counter-clockwise with a caller-supplied strategy.
    fn rotate_with(&mut self, rotator: &dyn Rotator, degrees: f32) -> OpsResult<()> {
        let out = rotator.rotate(self.buffer(), degrees)?;
        self.set_buffer(out);
        Ok(())
    }

    /// Nearest-neighbor scale, see [`resize::scale`].
    fn scale(&mut self, factor: ScaleFactor) -> OpsResult<()> {
        let out = resize::scale(self.buffer(), factor)?;
        self.set_buffer(out);
        Ok(())
    }
}

impl Renderable for PixelBuffer {
    #[inline]
    fn buffer(&self) -> &PixelBuffer {
        self
    }
}

impl Modifiable for PixelBuffer {
    #[inline]
    fn set_buffer(&mut self, buffer: PixelBuffer) {
        *self = buffer;
    }
}
