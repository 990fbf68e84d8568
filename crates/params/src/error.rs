use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{Kind, State};

/// Errors that can occur when declaring or loading parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// The parameter file does not exist or could not be read.
    #[error("cannot read parameter file `{}`", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A declared parameter's value could not be converted to its kind.
    ///
    /// Loading stops at the first such entry and no slot is written.
    #[error("line {line}: cannot parse `{raw}` as {kind} for parameter `{name}`")]
    Parse {
        name: String,
        raw: String,
        kind: Kind,
        line: usize,
    },

    /// The name was already declared on this store.
    #[error("parameter `{0}` is already declared")]
    DuplicateName(String),

    /// The operation is not allowed in the store's current state.
    #[error("cannot {operation} once the store is {state}")]
    InvalidState {
        operation: &'static str,
        state: State,
    },
}
