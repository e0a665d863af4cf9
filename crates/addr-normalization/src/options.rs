/// What to do with a data row that has fewer than two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Leave the row out and report it in the run result.
    Skip,
}

/// Options for a normalization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizationOptions {
    pub malformed_rows: MalformedRowPolicy,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }
}
