// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;
use crate::parsers::{parse_capacity, parse_terminator};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "balance_check",
    version = crate::VERSION,
    about = "Checks that (), {} and [] are properly nested",
    long_about = "Checks that (), {} and [] are properly nested.\n\n\
        Each input is scanned up to the first newline (or to the end with \
        --whole-input) and the first problem found is reported. The exit \
        status is 0 when every input is properly nested, 1 otherwise, and 2 \
        when an input or the configuration could not be read."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Files to check; `-` reads standard input. Standard input is used when
    /// neither files nor --expr are given.
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Check TEXT directly (repeatable)
    #[arg(short = 'e', long = "expr", value_name = "TEXT", help_heading = "Input")]
    pub exprs: Vec<String>,

    /// Scan each input to its end instead of stopping at the first newline
    #[arg(long, help_heading = "Input")]
    pub whole_input: bool,

    /// Stop scanning at CHAR instead of newline (escapes: \n \r \t \0)
    #[arg(
        long,
        value_name = "CHAR",
        value_parser = parse_terminator,
        conflicts_with = "whole_input",
        help_heading = "Input"
    )]
    pub terminator: Option<char>,

    /// Maximum nesting depth [default: 100]
    #[arg(short, long, value_parser = parse_capacity, help_heading = "Validation")]
    pub capacity: Option<usize>,

    /// Output format [default: text]
    #[arg(long, value_enum, help_heading = "Output")]
    pub format: Option<OutputFormat>,

    /// Print nothing; report through the exit status only
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Output")]
    pub quiet: bool,

    /// Never print the interactive prompt
    #[arg(long, help_heading = "Output")]
    pub no_prompt: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// JSON file providing defaults for capacity, terminator and format
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}
