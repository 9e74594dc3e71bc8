// crates/cli/src/config.rs
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use balance_check_core::ValidatorConfig;
use derive_builder::Builder;
use log::{debug, warn};
use serde::Deserialize;

use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::{InputSource, OutputFormat};

/// Resolved settings for one invocation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "vec![InputSource::Stdin]")]
    pub inputs: Vec<InputSource>,
    #[builder(default)]
    pub validator: ValidatorConfig,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub quiet: bool,
    #[builder(default = "true")]
    pub prompt: bool,
}

/// Defaults read from `--config`. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub capacity: Option<usize>,
    pub terminator: Option<char>,
    pub whole_input: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Load a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid JSON for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                AppError::ConfigParse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        debug!("loaded config from {}: {parsed:?}", path.display());
        Ok(parsed)
    }
}

impl Config {
    /// Resolve arguments, layered over the optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or holds an
    /// invalid value.
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(args, &file)
    }

    /// Merge `args` over `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting capacity is zero.
    pub fn resolve(args: Args, file: &ConfigFile) -> Result<Self> {
        let defaults = ValidatorConfig::default();

        if let (Some(flag), Some(from_file)) = (args.capacity, file.capacity)
            && flag != from_file
        {
            warn!("--capacity {flag} overrides capacity {from_file} from the config file");
        }
        let capacity = args
            .capacity
            .or(file.capacity)
            .unwrap_or(defaults.capacity);
        if capacity == 0 {
            return Err(AppError::Config("capacity must be at least 1".to_string()));
        }

        let whole_input = args.whole_input
            || (args.terminator.is_none() && file.whole_input.unwrap_or(false));
        let terminator = if whole_input {
            None
        } else {
            args.terminator
                .or(file.terminator)
                .or(defaults.terminator)
        };

        let validator = ValidatorConfig::new(capacity).with_terminator(terminator);
        let format = args.format.or(file.format).unwrap_or_default();

        ConfigBuilder::default()
            .inputs(collect_inputs(args.exprs, args.paths))
            .validator(validator)
            .format(format)
            .quiet(args.quiet)
            .prompt(!args.no_prompt)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn collect_inputs(exprs: Vec<String>, paths: Vec<PathBuf>) -> Vec<InputSource> {
    let mut inputs: Vec<InputSource> = exprs.into_iter().map(InputSource::Inline).collect();
    inputs.extend(paths.into_iter().map(|p| {
        if p.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(p)
        }
    }));
    if inputs.is_empty() {
        inputs.push(InputSource::Stdin);
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["balance_check"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_read_stdin_to_newline() {
        let config = Config::resolve(args(&[]), &ConfigFile::default()).unwrap();
        assert_eq!(config.inputs, vec![InputSource::Stdin]);
        assert_eq!(config.validator, ValidatorConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.prompt);
        assert!(!config.quiet);
    }

    #[test]
    fn exprs_come_before_paths_and_dash_is_stdin() {
        let config = Config::resolve(
            args(&["-e", "()", "a.txt", "-"]),
            &ConfigFile::default(),
        )
        .unwrap();
        assert_eq!(
            config.inputs,
            vec![
                InputSource::Inline("()".to_string()),
                InputSource::File(PathBuf::from("a.txt")),
                InputSource::Stdin,
            ]
        );
    }

    #[test]
    fn flags_override_file_values() {
        let file = ConfigFile {
            capacity: Some(8),
            terminator: Some(';'),
            whole_input: None,
            format: Some(OutputFormat::Json),
        };
        let config = Config::resolve(args(&["--capacity", "4", "--format", "jsonl"]), &file).unwrap();
        assert_eq!(config.validator.capacity, 4);
        assert_eq!(config.validator.terminator, Some(';'));
        assert_eq!(config.format, OutputFormat::Jsonl);
    }

    #[test]
    fn whole_input_clears_the_terminator() {
        let config = Config::resolve(args(&["--whole-input"]), &ConfigFile::default()).unwrap();
        assert_eq!(config.validator.terminator, None);

        let file = ConfigFile {
            whole_input: Some(true),
            ..ConfigFile::default()
        };
        let config = Config::resolve(args(&[]), &file).unwrap();
        assert_eq!(config.validator.terminator, None);

        let config = Config::resolve(args(&["--terminator", ";"]), &file).unwrap();
        assert_eq!(config.validator.terminator, Some(';'));
    }

    #[test]
    fn zero_capacity_from_file_is_rejected() {
        let file = ConfigFile {
            capacity: Some(0),
            ..ConfigFile::default()
        };
        let err = Config::resolve(args(&[]), &file).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn config_file_rejects_unknown_keys() {
        let parsed: std::result::Result<ConfigFile, _> =
            serde_json::from_str(r#"{ "capacity": 3, "depth": 9 }"#);
        assert!(parsed.is_err());

        let parsed: ConfigFile = serde_json::from_str(r#"{ "format": "json" }"#).unwrap();
        assert_eq!(parsed.format, Some(OutputFormat::Json));
        assert_eq!(parsed.capacity, None);
    }
}
