use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can end an evaluation run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The parameter file could not be read or a coordinate could not be parsed.
    #[error("failed to load input parameters")]
    Params(#[from] objective_params::Error),

    /// A required coordinate was declared but not present in the input.
    #[error("required parameter `{0}` is missing from the input")]
    MissingParameter(String),

    /// The output directory could not be created.
    #[error("cannot create output directory `{}`", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("cannot write output file `{}`", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
