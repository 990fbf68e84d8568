/// Summary of a successful load.
///
/// Names are sorted so reports are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub(crate) assigned: Vec<String>,
    pub(crate) missing: Vec<String>,
    pub(crate) ignored: usize,
}

impl LoadReport {
    /// Declared parameters that received a value.
    #[must_use]
    pub fn assigned(&self) -> &[String] {
        &self.assigned
    }

    /// Declared parameters absent from the input, whose storage was left as is.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Number of entries whose key had no declaration.
    #[must_use]
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Returns `true` if the named parameter received a value.
    #[must_use]
    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.iter().any(|n| n == name)
    }

    /// Returns `true` if the named parameter was declared but not in the input.
    #[must_use]
    pub fn is_missing(&self, name: &str) -> bool {
        self.missing.iter().any(|n| n == name)
    }
}
