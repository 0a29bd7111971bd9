//! Row-parallel output filling.
//!
//! Every operation computes output rows independently, so the pixel loop is
//! split per row. With the `parallel` feature rows are distributed over the
//! rayon global pool; without it the same callback runs sequentially.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calls `f(y, row)` for every `row_len`-byte row of `dst`.
///
/// A zero `row_len` (zero-width buffer) is a no-op.
#[cfg(feature = "parallel")]
pub(crate) fn fill_rows<F>(dst: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Calls `f(y, row)` for every `row_len`-byte row of `dst` (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_rows<F>(dst: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }
    dst.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
