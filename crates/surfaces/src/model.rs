use std::convert::Infallible;

use objective_core::Model;

use crate::{Coordinate, Surface, evaluate};

/// A benchmark [`Surface`] exposed as a [`Model`].
///
/// Evaluation is total, so the model never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceModel {
    surface: Surface,
}

impl SurfaceModel {
    /// Creates a model for the given surface.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }

    /// Returns the surface this model evaluates.
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

impl Model for SurfaceModel {
    type Input = Coordinate;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Coordinate) -> Result<f64, Self::Error> {
        Ok(evaluate(*input, self.surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn model_matches_direct_evaluation() {
        let coord = Coordinate::new(-1.25, 0.75);

        for surface in Surface::ALL {
            let model = SurfaceModel::new(surface);
            let Ok(output) = model.call(&coord);
            assert_eq!(output.to_bits(), evaluate(coord, surface).to_bits());
        }
    }

    #[test]
    fn snapshot_keeps_the_coordinate() {
        let model = SurfaceModel::new(Surface::Bowl);
        let Ok(snapshot) = model.snapshot(Coordinate::from([0.5, 1.0]));

        assert_eq!(snapshot.input, Coordinate::new(0.5, 1.0));
        assert_relative_eq!(snapshot.output, -0.25);
    }
}
