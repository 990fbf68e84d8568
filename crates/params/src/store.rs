use std::{collections::HashMap, fmt, fs, path::Path};

use log::{debug, trace};

use crate::{
    Error, Kind, LoadReport, Slot,
    entry::{Line, classify},
    slot::Pending,
};


/// Lifecycle of a [`ParameterStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    /// Declarations are accepted and no input has been loaded yet.
    #[default]
    Declaring,

    /// Input has been loaded; the store is read-only.
    Loaded,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Declaring => f.write_str("declaring"),
            State::Loaded => f.write_str("loaded"),
        }
    }
}

/// A registry of named parameters bound to caller-owned storage.
///
/// The store holds mutable borrows of the declared variables for its whole
/// lifetime, so the caller reads the loaded values back once the store has
/// been dropped.
///
/// # Lifecycle
///
/// Parameters are declared first, then a single successful [`load`] fills
/// every declared parameter present in the input. After that the store is
/// [`State::Loaded`] and both further declarations and further loads fail
/// with [`Error::InvalidState`]. A failed load leaves the store declaring.
///
/// [`load`]: ParameterStore::load
#[derive(Debug, Default)]
pub struct ParameterStore<'a> {
    slots: HashMap<String, Slot<'a>>,
    state: State,
}

impl<'a> ParameterStore<'a> {
    /// Creates an empty store ready for declarations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter named `name` that writes into `storage`.
    ///
    /// The storage type decides the parameter's [`Kind`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `name` is already declared, or
    /// [`Error::InvalidState`] if the store has already been loaded.
    pub fn declare(
        &mut self,
        storage: impl Into<Slot<'a>>,
        name: impl Into<String>,
    ) -> Result<(), Error> {
        self.ensure_declaring("declare")?;

        let name = name.into();
        if self.slots.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        let slot = storage.into();
        trace!("declared {} parameter `{name}`", slot.kind());
        self.slots.insert(name, slot);
        Ok(())
    }

    /// Loads parameter values from the file at `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so they only
    /// cause an error when they appear in the value of a declared entry.
    /// See [`load_str`](Self::load_str) for the parsing rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file cannot be opened or read,
    /// plus any error [`load_str`](Self::load_str) can return. No storage is
    /// written when an error is returned.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, Error> {
        self.ensure_declaring("load")?;

        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loading parameters from {}", path.display());
        self.load_str(&String::from_utf8_lossy(&bytes))
    }

    /// Loads parameter values from key/value text.
    ///
    /// Every entry whose key is declared is converted to the declared kind.
    /// If a key repeats, its last entry is the one converted. Values are
    /// committed only after all of them convert, so a failed load leaves
    /// every slot untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for the earliest line whose value cannot be
    /// converted, or [`Error::InvalidState`] if the store was already loaded.
    pub fn load_str(&mut self, text: &str) -> Result<LoadReport, Error> {
        self.ensure_declaring("load")?;

        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut staged = HashMap::new();
        let mut ignored = 0;

        for (index, line) in text.lines().enumerate() {
            let (name, raw) = match classify(line) {
                Line::Blank | Line::Comment => continue,
                Line::Unrecognized => {
                    debug!("skipping unrecognized line {}: {line:?}", index + 1);
                    continue;
                }
                Line::Entry { name, raw } => (name, raw),
            };

            if !self.slots.contains_key(name) {
                trace!("ignoring undeclared key `{name}`");
                ignored += 1;
                continue;
            }

            staged.insert(name, (raw, index + 1));
        }

        let mut report = LoadReport {
            ignored,
            ..LoadReport::default()
        };
        let mut pending = Vec::with_capacity(staged.len());
        let mut failure: Option<(usize, Error)> = None;

        for (name, slot) in &mut self.slots {
            let Some(&(raw, line)) = staged.get(name.as_str()) else {
                report.missing.push(name.clone());
                continue;
            };

            let kind = slot.kind();
            match slot.prepare(raw) {
                Some(value) => {
                    debug!("{name} = {raw}");
                    pending.push(value);
                    report.assigned.push(name.clone());
                }
                None if failure.as_ref().is_some_and(|(first, _)| *first <= line) => {}
                None => {
                    let err = Error::Parse {
                        name: name.clone(),
                        raw: raw.to_owned(),
                        kind,
                        line,
                    };
                    failure = Some((line, err));
                }
            }
        }

        if let Some((_, err)) = failure {
            return Err(err);
        }

        pending.into_iter().for_each(Pending::commit);

        report.assigned.sort();
        report.missing.sort();

        self.state = State::Loaded;
        Ok(report)
    }

    /// Returns the store's lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns `true` once input has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == State::Loaded
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Returns the kind of the parameter named `name`, if declared.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.slots.get(name).map(Slot::kind)
    }

    /// Returns an iterator over the declared names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn ensure_declaring(&self, operation: &'static str) -> Result<(), Error> {
        match self.state {
            State::Declaring => Ok(()),
            state => Err(Error::InvalidState { operation, state }),
        }
    }
}
