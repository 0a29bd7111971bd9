//! Straight-alpha 8-bit RGBA color.
//!
//! [`Color`] is both the element type read out of a
//! [`PixelBuffer`](crate::PixelBuffer) and the uniform tint parameter of
//! `apply_color`. Channels are plain sRGB bytes, not premultiplied.
//!
//! # Example
//!
//! ```rust
//! use pixops_core::Color;
//!
//! let red = Color::opaque(255, 0, 0);
//! assert!(red.is_opaque());
//! assert_eq!(red.to_array(), [255, 0, 0, 255]);
//! assert_eq!(Color::from([0, 0, 0, 0]), Color::TRANSPARENT);
//! ```

use std::fmt;

/// A single `(R, G, B, A)` pixel value, 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Color {
    /// Fully transparent black `(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates a color from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Reads a color from the first four bytes of an interleaved RGBA slice.
    ///
    /// # Panics
    ///
    /// Panics if `px` is shorter than four bytes.
    #[inline]
    pub fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// Returns a copy with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Returns `true` if alpha is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Returns `true` if alpha is 0.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [u8; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
