use serde::{Deserialize, Serialize};

/// Nesting depth supported when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// End-of-stream marker used when no terminator is configured.
pub const DEFAULT_TERMINATOR: char = '\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum number of simultaneously open brackets.
    pub capacity: usize,
    /// Character that ends the scan without being consumed as data.
    /// `None` scans until the input is exhausted.
    pub terminator: Option<char>,
}

impl ValidatorConfig {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            terminator: Some(DEFAULT_TERMINATOR),
        }
    }

    #[must_use]
    pub const fn with_terminator(mut self, terminator: Option<char>) -> Self {
        self.terminator = terminator;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
