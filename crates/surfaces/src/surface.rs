use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::Coordinate;

/// Selects which benchmark formula to evaluate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Surface {
    /// `20 + x² − 10·cos(2πx) + y² − 10·cos(2πy)`, also known as Rastrigin.
    #[default]
    MultimodalPeriodic,

    /// `sin(6x) + sin(6y) − (x − π/2)² − (y − π/2)²`
    WavyOffset,

    /// `1 − (x² + y²)`
    Bowl,
}

/// Whether a known optimum is a minimum or a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimum,
    Maximum,
}

/// A known global optimum of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimum {
    pub coordinate: Coordinate,
    pub value: f64,
    pub sense: Sense,
}

/// Error returned when parsing an unrecognized surface name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown surface `{0}` (expected one of: {names})", names = Surface::names().join(", "))]
pub struct UnknownSurface(pub String);

impl Surface {
    /// All surfaces, in declaration order.
    pub const ALL: [Surface; 3] = [
        Surface::MultimodalPeriodic,
        Surface::WavyOffset,
        Surface::Bowl,
    ];

    /// Returns the canonical names of all surfaces.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|surface| surface.name()).collect()
    }

    /// Returns the canonical name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Surface::MultimodalPeriodic => "multimodal_periodic",
            Surface::WavyOffset => "wavy_offset",
            Surface::Bowl => "bowl",
        }
    }

    /// Returns a one-line description of the surface.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Surface::MultimodalPeriodic => {
                "Rastrigin surface, periodic local minima, global minimum 0 at the origin"
            }
            Surface::WavyOffset => "sine ripples over a paraboloid centered at (pi/2, pi/2)",
            Surface::Bowl => "inverted paraboloid, global maximum 1 at the origin",
        }
    }

    /// Returns `true` if the surface has more than one local optimum.
    #[must_use]
    pub fn is_multimodal(self) -> bool {
        !matches!(self, Surface::Bowl)
    }

    /// Returns the known global optimum, if there is a closed form for it.
    #[must_use]
    pub fn known_optimum(self) -> Option<Optimum> {
        match self {
            Surface::MultimodalPeriodic => Some(Optimum {
                coordinate: Coordinate::new(0.0, 0.0),
                value: 0.0,
                sense: Sense::Minimum,
            }),
            Surface::WavyOffset => None,
            Surface::Bowl => Some(Optimum {
                coordinate: Coordinate::new(0.0, 0.0),
                value: 1.0,
                sense: Sense::Maximum,
            }),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = UnknownSurface;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        match name.as_str() {
            "multimodal_periodic" | "rastrigin" => Ok(Surface::MultimodalPeriodic),
            "wavy_offset" => Ok(Surface::WavyOffset),
            "bowl" => Ok(Surface::Bowl),
            _ => Err(UnknownSurface(s.to_owned())),
        }
    }
}
