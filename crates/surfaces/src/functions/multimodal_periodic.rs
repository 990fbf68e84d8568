//! Rastrigin-type multimodal surface.

use std::f64::consts::PI;

/// `20 + x² − 10·cos(2πx) + y² − 10·cos(2πy)`
///
/// Global minimum: f(0, 0) = 0.
/// Local minima sit close to every integer lattice point.
#[must_use]
pub fn multimodal_periodic(x: f64, y: f64) -> f64 {
    20.0 + (axis(x) + axis(y))
}

fn axis(t: f64) -> f64 {
    t * t - 10.0 * (2.0 * PI * t).cos()
}
