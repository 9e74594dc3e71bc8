use balance_check_cli::app::{self, EXIT_USAGE};
use balance_check_cli::args::Args;
use balance_check_cli::config::Config;
use balance_check_cli::{logging, presentation};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::level_for(args.verbose, args.quiet));

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match app::run(&config) {
        Ok(summary) => {
            if !config.quiet {
                let mut stdout = std::io::stdout().lock();
                if let Err(e) =
                    presentation::write_reports(&mut stdout, &summary.reports, config.format)
                {
                    eprintln!("Output Error: {e}");
                    return ExitCode::from(EXIT_USAGE);
                }
            }
            summary.exit_code()
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
