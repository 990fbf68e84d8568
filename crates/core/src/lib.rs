//! Core traits and types shared by the objective evaluator crates.
//!
//! - [`Model`] — a deterministic callable mapping a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call

mod model;

pub use model::{Model, Snapshot};
