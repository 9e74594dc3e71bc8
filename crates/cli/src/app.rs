// crates/cli/src/app.rs
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use log::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::options::{InputSource, OutputFormat};
use crate::presentation::{InputReport, PROMPT};

/// Exit status when an input or the configuration could not be read.
pub const EXIT_USAGE: u8 = 2;

/// Reports for every input of one invocation, in input order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<InputReport>,
}

impl RunSummary {
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.reports.iter().all(|r| r.report.result.is_valid())
    }

    /// Success only when every input was properly nested.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.all_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Validate every configured input, each with its own validator.
///
/// # Errors
///
/// Stops at the first input that cannot be read.
pub fn run(config: &Config) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for source in &config.inputs {
        let label = source.label();
        if matches!(source, InputSource::Stdin) && should_prompt(config) {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }

        info!("checking {label}");
        let report = input::check(source, &config.validator)?;
        info!("{label}: {:?} after {} chars", report.result, report.consumed);
        if report.consumed == 0 {
            warn!("{label}: no characters to check");
        }

        summary.reports.push(InputReport {
            input: label,
            report,
        });
    }

    Ok(summary)
}

fn should_prompt(config: &Config) -> bool {
    config.prompt
        && !config.quiet
        && config.format == OutputFormat::Text
        && io::stdin().is_terminal()
}
