//! Command-line argument parsing.
//!
//! Hand-rolled over `std::env::args`: three long options in `--flag=value`
//! or `--flag value` form. Anything else that looks like an option is a
//! usage error; bare positional arguments are ignored.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Scale;

/// Usage line printed on any argument error.
pub const USAGE: &str = "Usage: thermowatch [--period=<secs>] [--scale=C|F] [--log=<file>]";

/// Parsed startup options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Sampling interval in seconds, at least 1.
    pub period_secs: u64,
    /// Initial unit scale.
    pub scale: Scale,
    /// Mirror file for all output, created/truncated at startup.
    pub log_path: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            period_secs: 1,
            scale: Scale::Fahrenheit,
            log_path: None,
        }
    }
}

/// Argument errors. All of them are usage errors: print [`USAGE`] and
/// exit with status 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("invalid argument for --scale: {0:?} (expected C or F)")]
    InvalidScale(String),

    #[error("invalid argument for --period: {0:?} (expected a positive integer)")]
    InvalidPeriod(String),

    #[error("option --{0} requires a value")]
    MissingValue(&'static str),

    #[error("unrecognized option: {0}")]
    UnknownOption(String),
}

/// Parse the argument list (without the program name).
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<CliOptions, CliError> {
    let mut opts = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let Some(option) = arg.strip_prefix("--") else {
            // Positional arguments are ignored, as getopt_long would.
            continue;
        };

        let (name, inline_value) = match option.split_once('=') {
            Some((n, v)) => (n, Some(v.to_owned())),
            None => (option, None),
        };

        match name {
            "period" => {
                let v = value_for("period", inline_value, &mut args)?;
                opts.period_secs = v
                    .parse::<u64>()
                    .ok()
                    .filter(|&secs| secs >= 1)
                    .ok_or(CliError::InvalidPeriod(v))?;
            }
            "scale" => {
                let v = value_for("scale", inline_value, &mut args)?;
                opts.scale = match v.as_str() {
                    "C" => Scale::Celsius,
                    "F" => Scale::Fahrenheit,
                    _ => return Err(CliError::InvalidScale(v)),
                };
            }
            "log" => {
                let v = value_for("log", inline_value, &mut args)?;
                opts.log_path = Some(PathBuf::from(v));
            }
            _ => return Err(CliError::UnknownOption(arg)),
        }
    }

    Ok(opts)
}

fn value_for(
    name: &'static str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, CliError> {
    inline
        .or_else(|| rest.next())
        .ok_or(CliError::MissingValue(name))
}
