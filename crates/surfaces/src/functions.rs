//! Benchmark formulas as plain functions of `(x, y)`.
//!
//! Every formula is written as a sum of identical per-axis terms, so swapping
//! `x` and `y` yields a bit-for-bit identical result.

mod bowl;
mod multimodal_periodic;
mod wavy_offset;

pub use bowl::bowl;
pub use multimodal_periodic::multimodal_periodic;
pub use wavy_offset::wavy_offset;
