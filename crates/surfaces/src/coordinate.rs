/// A point on a two-dimensional benchmark surface.
///
/// No domain is imposed; any finite pair is a valid evaluation point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate from its components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate with its components exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
