//! Two-dimensional benchmark surfaces for testing black-box optimizers.
//!
//! Each surface is a pure, deterministic function of a [`Coordinate`] that is
//! defined for every finite input. The surface is chosen at run time through
//! [`Surface`], and [`evaluate`] dispatches to exactly one formula:
//!
//! - [`Surface::MultimodalPeriodic`] — Rastrigin-type surface with a periodic
//!   grid of local minima and its global minimum of 0 at the origin
//! - [`Surface::WavyOffset`] — sine ripples over a bowl centered at (π/2, π/2)
//! - [`Surface::Bowl`] — inverted paraboloid with its maximum of 1 at the origin
//!
//! [`SurfaceModel`] exposes a surface through the [`Model`] trait.
//!
//! [`Model`]: objective_core::Model

pub mod functions;

mod coordinate;
mod model;
mod surface;

pub use coordinate::Coordinate;
pub use model::SurfaceModel;
pub use surface::{Optimum, Sense, Surface, UnknownSurface};

/// Evaluates `surface` at `coord`.
///
/// Total over all finite inputs and free of side effects.
#[must_use]
pub fn evaluate(coord: Coordinate, surface: Surface) -> f64 {
    let Coordinate { x, y } = coord;
    match surface {
        Surface::MultimodalPeriodic => functions::multimodal_periodic(x, y),
        Surface::WavyOffset => functions::wavy_offset(x, y),
        Surface::Bowl => functions::bowl(x, y),
    }
}
