//! Test buffers and logging setup.

use pixops_core::{Color, PixelBuffer};
use tracing_subscriber::EnvFilter;

/// Installs a `RUST_LOG`-filtered subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Opaque buffer whose red/green channels encode the pixel coordinate.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        Color::opaque((x % 256) as u8, (y % 256) as u8, 128)
    })
}

/// Checkerboard of `on` and fully transparent cells of `cell` pixels.
pub fn checker(width: u32, height: u32, cell: u32, on: Color) -> PixelBuffer {
    let cell = cell.max(1);
    PixelBuffer::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            on
        } else {
            Color::new(17, 34, 51, 0)
        }
    })
}

/// Deterministic pseudo-random buffer (xorshift), alpha included.
pub fn noise(width: u32, height: u32, seed: u32) -> PixelBuffer {
    let mut state = seed.max(1);
    PixelBuffer::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        Color::from_array(state.to_le_bytes())
    })
}
