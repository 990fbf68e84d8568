use std::f64::consts::FRAC_PI_2;

/// `sin(6x) + sin(6y) − (x − π/2)² − (y − π/2)²`
#[must_use]
pub fn wavy_offset(x: f64, y: f64) -> f64 {
    axis(x) + axis(y)
}

fn axis(t: f64) -> f64 {
    (6.0 * t).sin() - (t - FRAC_PI_2).powi(2)
}
