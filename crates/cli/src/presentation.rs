// crates/cli/src/presentation.rs
use std::io::Write;

use balance_check_core::{Report, ValidationResult};
use serde::Serialize;

use crate::error::Result;
use crate::options::OutputFormat;

pub const PROMPT: &str = "Enter parentheses and/or braces: ";

/// The report for one input, labelled with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct InputReport {
    pub input: String,
    #[serde(flatten)]
    pub report: Report,
}

/// Human-readable sentence for a verdict.
#[must_use]
pub fn message(result: &ValidationResult) -> String {
    match result {
        ValidationResult::Valid => "Everything nested properly.".to_string(),
        ValidationResult::Mismatch { expected, found } => {
            format!("Wanted '{expected}'. Got '{found}'.")
        }
        ValidationResult::UnmatchedCloser { closer } => {
            format!("Got '{closer}' with nothing open.")
        }
        ValidationResult::UnclosedOpener { opener } => {
            format!("Improper nesting: '{opener}' remaining.")
        }
        ValidationResult::Overflow { capacity } => {
            format!("Stack full: can't push! (capacity {capacity})")
        }
        ValidationResult::Underflow => "Stack empty: can't pop!".to_string(),
    }
}

fn text_line(entry: &InputReport, labelled: bool) -> String {
    let mut line = String::new();
    if labelled {
        line.push_str(&entry.input);
        line.push_str(": ");
    }
    line.push_str(&message(&entry.report.result));
    if let Some(offset) = entry.report.offset {
        line.push_str(&format!(" (at offset {offset})"));
    }
    line
}

/// Write all reports in `format`.
///
/// # Errors
///
/// Returns an error if writing or serializing fails.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[InputReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let labelled = reports.len() > 1;
            for entry in reports {
                writeln!(out, "{}", text_line(entry, labelled))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for entry in reports {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
