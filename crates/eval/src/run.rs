use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use objective_core::{Model, Snapshot};
use objective_params::ParameterStore;
use objective_surfaces::{Coordinate, Surface, SurfaceModel};

use crate::{RunConfig, RunError};

/// Name of the parameter holding the x coordinate.
pub const X_COORD: &str = "x_coord";

/// Name of the parameter holding the y coordinate.
pub const Y_COORD: &str = "y_coord";

/// The outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Surface that was evaluated.
    pub surface: Surface,

    /// Evaluated coordinate and resulting value.
    pub snapshot: Snapshot<Coordinate, f64>,

    /// Where the value was written.
    pub output_path: PathBuf,
}

impl Evaluation {
    /// Returns the evaluated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.snapshot.output
    }
}

/// Runs one evaluation: read the coordinate, evaluate, persist the value.
///
/// # Errors
///
/// Returns an error if the parameters cannot be loaded, a coordinate is
/// missing, or the output cannot be written. Nothing is written unless the
/// coordinate was read successfully.
pub fn run(config: &RunConfig) -> Result<Evaluation, RunError> {
    let coordinate = read_coordinate(config.input())?;

    let model = SurfaceModel::new(config.surface);
    let Ok(snapshot) = model.snapshot(coordinate);
    info!(
        "{} at ({}, {}) = {}",
        config.surface, coordinate.x, coordinate.y, snapshot.output
    );

    let output_path = write_output(config, snapshot.output)?;

    Ok(Evaluation {
        surface: config.surface,
        snapshot,
        output_path,
    })
}

/// Reads [`X_COORD`] and [`Y_COORD`] from the parameter file at `path`.
///
/// # Errors
///
/// Returns [`RunError::Params`] if the file cannot be read or a coordinate
/// cannot be parsed, and [`RunError::MissingParameter`] if either coordinate
/// is absent.
pub fn read_coordinate(path: &Path) -> Result<Coordinate, RunError> {
    let mut x = f64::NAN;
    let mut y = f64::NAN;

    let report = {
        let mut store = ParameterStore::new();
        store.declare(&mut x, X_COORD)?;
        store.declare(&mut y, Y_COORD)?;
        store.load(path)?
    };

    if let Some(name) = report.missing().first() {
        return Err(RunError::MissingParameter(name.clone()));
    }

    Ok(Coordinate::new(x, y))
}

/// Writes `value` to the configured output file, creating its directory.
///
/// The file holds the value's shortest round-trip decimal form and a newline.
/// Existing content is replaced.
///
/// # Errors
///
/// Returns [`RunError::CreateDir`] if the directory cannot be created, or
/// [`RunError::WriteOutput`] if the file cannot be written.
pub fn write_output(config: &RunConfig, value: f64) -> Result<PathBuf, RunError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| RunError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let path = config.output_path();
    fs::write(&path, format!("{value}\n")).map_err(|source| RunError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    info!("wrote {}", path.display());
    Ok(path)
}
