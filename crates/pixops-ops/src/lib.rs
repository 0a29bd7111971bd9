//! # pixops-ops
//!
//! Deterministic RGBA pixel-buffer transforms used as compositing building
//! blocks.
//!
//! Every operation borrows its input buffer(s) and returns a newly allocated
//! [`PixelBuffer`](pixops_core::PixelBuffer). Inputs are never mutated and no
//! state is shared between calls, so operations may run concurrently on any
//! buffers. Validation happens before the output is allocated; an operation
//! either returns a complete buffer or an [`OpsError`].
//!
//! # Modules
//!
//! - [`transform`] - Flips and lossless quarter turns
//! - [`tint`] - Uniform color tint
//! - [`mask`] - Fill-mask and apply-mask compositing
//! - [`resize`] - Nearest-neighbor scaling
//! - [`rotate`] - Pluggable arbitrary-angle rotation
//! - [`modify`] - `Renderable` / `Modifiable` capability traits
//!
//! # Example
//!
//! ```rust
//! use pixops_core::{Color, PixelBuffer};
//! use pixops_ops::{mask, resize, tint, transform};
//!
//! let base = PixelBuffer::filled(4, 4, Color::opaque(255, 0, 0));
//! let flipped = transform::flip_x(&base);
//! let tinted = tint::apply_color(&flipped, Color::opaque(0, 0, 255)).unwrap();
//! let holes = PixelBuffer::filled(2, 2, Color::WHITE);
//! let filled = mask::fill_mask(&tinted, &holes).unwrap();
//! let small = resize::scale_by(&filled, 0.5, 0.5).unwrap();
//! assert_eq!(small.dimensions(), (2, 2));
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - Fill output rows on the rayon global pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parallel;
pub mod mask;
pub mod modify;
pub mod resize;
pub mod rotate;
pub mod tint;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use mask::{apply_mask, fill_mask};
pub use modify::{Modifiable, Renderable};
pub use resize::{scale, scale_by};
pub use rotate::{CubicRotator, Rotator};
pub use tint::apply_color;
pub use transform::{flip_x, flip_y};
