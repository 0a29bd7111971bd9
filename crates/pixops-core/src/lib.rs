//! # pixops-core
//!
//! Core types for in-memory RGBA pixel transforms.
//!
//! This crate provides the data model shared by every pixops crate:
//!
//! - [`PixelBuffer`] - Row-major 8-bit RGBA pixel grid
//! - [`Color`] - A single straight-alpha RGBA value
//! - [`ScaleFactor`] - Validated pair of positive scale ratios
//! - [`Error`] - Bounds, dimension and parameter errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixops-core (this crate)
//!    ^
//!    |
//!    +-- pixops-ops (flip, tint, masks, scale, rotate)
//!    +-- pixops-tests (integration tests)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//!
//! let mut buf = PixelBuffer::new(4, 4);
//! buf.set_pixel(1, 2, Color::new(255, 0, 0, 255));
//! assert_eq!(buf.pixel(1, 2), Color::new(255, 0, 0, 255));
//! assert_eq!(buf.pixel(0, 0), Color::TRANSPARENT);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod color;
pub mod error;
pub mod scale;

// Re-exports for convenience
pub use buffer::{PixelBuffer, CHANNELS};
pub use color::Color;
pub use error::{Error, Result};
pub use scale::ScaleFactor;

/// Prelude module for convenient imports.
///
/// ```
/// use pixops_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, CHANNELS};
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::scale::ScaleFactor;
}
