//! Evaluates a benchmark surface at a point proposed by an external optimizer.
//!
//! A run reads `x_coord` and `y_coord` from a parameter file, evaluates the
//! configured [`Surface`], and writes the value to `data/output.dat` (by
//! default) for the optimizer to read back.
//!
//! Each run is independent. Concurrent runs against the same output path race
//! and the last writer wins.
//!
//! [`Surface`]: objective_surfaces::Surface

mod config;
mod error;
mod run;

pub use config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE, RunConfig};
pub use error::RunError;
pub use run::{Evaluation, X_COORD, Y_COORD, read_coordinate, run, write_output};
