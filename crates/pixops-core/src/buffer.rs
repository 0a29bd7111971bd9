//! Row-major RGBA pixel buffer.
//!
//! [`PixelBuffer`] is the sole data interchange type of pixops: a width, a
//! height and `width * height` pixels of four 8-bit channels.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Ownership
//!
//! Every transform in `pixops-ops` borrows its inputs and returns a freshly
//! allocated buffer. The caller owns the result exclusively; no transform keeps
//! a reference to any buffer after returning.
//!
//! # Usage
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//!
//! let buf = PixelBuffer::from_fn(3, 2, |x, y| Color::opaque(x as u8, y as u8, 0));
//! assert_eq!(buf.dimensions(), (3, 2));
//! assert_eq!(buf.pixel(2, 1), Color::opaque(2, 1, 0));
//! assert_eq!(buf.get_pixel(3, 0), None);
//! ```

use crate::{Color, Error, Result};
use std::fmt;

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned 8-bit RGBA pixel grid.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    /// Interleaved RGBA bytes, `width * height * 4` long
    data: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

/// Computes the byte length of a `width x height` buffer.
///
/// Lengths above `isize::MAX` are rejected: no allocation can hold them.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or_else(|| {
            Error::invalid_dimensions(width as u64, height as u64, "buffer size exceeds isize::MAX")
        })
}

impl PixelBuffer {
    /// Creates a buffer filled with transparent black.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` exceeds `isize::MAX`. Use
    /// [`try_new`](Self::try_new) for untrusted sizes.
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Ok(buf) => buf,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a buffer filled with transparent black, checking for overflow.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Creates a zero-area buffer.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a buffer with every pixel set to `color`.
    ///
    /// ```rust
    /// use pixops_core::{Color, PixelBuffer};
    ///
    /// let red = PixelBuffer::filled(2, 2, Color::opaque(255, 0, 0));
    /// assert!(red.pixels().all(|(_, _, c)| c == Color::opaque(255, 0, 0)));
    /// ```
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut buf = Self::new(width, height);
        buf.fill(color);
        buf
    }

    /// Creates a buffer from interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width as u64,
                height as u64,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Color]) -> Result<Self> {
        let expected = byte_len(width, height)? / CHANNELS;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width as u64,
                height as u64,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        let data = pixels.iter().flat_map(|c| c.to_array()).collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// # Panics
    ///
    /// Panics on size overflow, like [`new`](Self::new).
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut buf = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buf.set_pixel(x, y, f(x, y));
            }
        }
        buf
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the number of bytes in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if a `width x height` extent anchored at the origin
    /// fits inside this buffer.
    #[inline]
    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGBA bytes mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning its bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        Color::new(
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        )
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y), or [`Error::OutOfBounds`].
    #[inline]
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Color> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        self.data[o..o + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Returns row `y` as interleaved bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.row_len();
        &self.data[start..start + self.row_len()]
    }

    /// Returns row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let len = self.row_len();
        let start = y as usize * len;
        &mut self.data[start..start + len]
    }

    /// Iterates over all pixels with their coordinates, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
