//! Named, typed parameters bound to caller-owned storage.
//!
//! A [`ParameterStore`] decouples the values a program needs from the way they
//! are written down. Callers declare each parameter by lending the store a
//! mutable reference to the variable that should receive it, then load a
//! key/value text file exactly once:
//!
//! ```
//! use objective_params::ParameterStore;
//!
//! let mut x = 0.0;
//! let mut label = String::new();
//!
//! let mut store = ParameterStore::new();
//! store.declare(&mut x, "x_coord").unwrap();
//! store.declare(&mut label, "label").unwrap();
//!
//! let report = store
//!     .load_str("# proposed point\nx_coord=0.500000\nunused = 3\n")
//!     .unwrap();
//! assert!(report.is_missing("label"));
//!
//! drop(store);
//! assert_eq!(x, 0.5);
//! assert!(label.is_empty());
//! ```
//!
//! # Input format
//!
//! One entry per line as `name = value`, with optional whitespace around each
//! part. A whitespace-separated `name value` pair is accepted as well.
//! Blank lines and lines starting with `#` or `//` are skipped, and keys with
//! no matching declaration are ignored so one file can serve many programs.

mod entry;
mod error;
mod report;
mod slot;
mod store;

pub use error::Error;
pub use report::LoadReport;
pub use slot::{Kind, Slot};
pub use store::{ParameterStore, State};
