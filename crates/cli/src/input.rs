// crates/cli/src/input.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use balance_check_core::{Report, Step, Validator, ValidatorConfig};
use log::trace;

use crate::error::{AppError, Result};
use crate::options::InputSource;

/// Validate one input with a fresh validator.
///
/// # Errors
///
/// Returns [`AppError::Input`] if the file or stream cannot be read.
pub fn check(source: &InputSource, config: &ValidatorConfig) -> Result<Report> {
    let read = match source {
        InputSource::Inline(text) => {
            let mut validator = Validator::new(*config);
            validator.feed_str(text);
            return Ok(validator.report());
        }
        InputSource::Stdin => check_reader(io::stdin().lock(), config),
        InputSource::File(path) => {
            File::open(path).and_then(|f| check_reader(BufReader::new(f), config))
        }
    };
    read.map_err(|source_err| AppError::Input {
        input: source.label(),
        source: source_err,
    })
}

/// Feed `reader` byte by byte, stopping as soon as the verdict is known.
///
/// Each byte is one character; multi-byte sequences are not decoded.
///
/// # Errors
///
/// Propagates read errors from `reader`.
pub fn check_reader<R: BufRead>(reader: R, config: &ValidatorConfig) -> io::Result<Report> {
    let mut validator = Validator::new(*config);
    for byte in reader.bytes() {
        if validator.feed(char::from(byte?)) == Step::Stop {
            trace!("verdict reached after {} chars", validator.consumed());
            break;
        }
    }
    Ok(validator.report())
}
