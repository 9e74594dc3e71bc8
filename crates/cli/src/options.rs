use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per input
    #[default]
    Text,
    /// A JSON array of reports
    Json,
    /// One JSON report per line
    Jsonl,
}

/// Where the characters of one input come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(std::path::PathBuf),
    Inline(String),
}

impl InputSource {
    /// Label used when reporting on this input.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Inline(text) => format!("{text:?}"),
        }
    }
}
