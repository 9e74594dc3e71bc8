// crates/core/src/outcome.rs
use serde::{Deserialize, Serialize};

use crate::stack::StackError;

/// Verdict of one validation run.
///
/// Exactly one verdict is produced per run: validation stops at the first
/// structural problem and never aggregates several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationResult {
    /// End of input reached with nothing left open.
    Valid,
    /// The closer `found` does not close the opener `expected` on top of the stack.
    Mismatch { expected: char, found: char },
    /// A closer arrived while nothing was open.
    UnmatchedCloser { closer: char },
    /// End of input reached with openers still on the stack.
    ///
    /// The innermost (most recently pushed) opener is reported, matching the
    /// order in which a closer would have had to resolve them.
    UnclosedOpener { opener: char },
    /// An opener would have exceeded the bounded stack.
    Overflow { capacity: usize },
    /// A pop was attempted on an empty stack.
    Underflow,
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether the run was cut short by a structural violation, as opposed to
    /// reaching the end of its input.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Mismatch { .. }
                | Self::UnmatchedCloser { .. }
                | Self::Overflow { .. }
                | Self::Underflow
        )
    }
}

impl From<StackError> for ValidationResult {
    fn from(err: StackError) -> Self {
        match err {
            StackError::Overflow { capacity } => Self::Overflow { capacity },
            StackError::Underflow => Self::Underflow,
        }
    }
}

/// A verdict together with where and how deep the scan went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub result: ValidationResult,
    /// Zero-based index of the character that failed the run.
    pub offset: Option<usize>,
    /// Data characters scanned, terminator excluded.
    pub consumed: usize,
    pub max_depth: usize,
    /// Openers still on the stack when the run ended.
    pub remaining: usize,
}
