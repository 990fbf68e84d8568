/// `1 − (x² + y²)`
///
/// Global maximum: f(0, 0) = 1.
#[must_use]
pub fn bowl(x: f64, y: f64) -> f64 {
    1.0 - (x * x + y * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn worked_values() {
        assert_relative_eq!(bowl(0.0, 0.0), 1.0);
        assert_relative_eq!(bowl(0.5, 1.0), -0.25);
        assert_relative_eq!(bowl(-3.0, 4.0), -24.0);
    }
}
