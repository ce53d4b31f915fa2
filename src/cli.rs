//! Command line parsing for the `hdist` binary
//!
//! Accepts `[-f|--file | -n|--number] ARG1 ARG2`. Help and version
//! requests short-circuit before any input is looked at.

use std::ffi::OsString;

use crate::config::{Config, Mode};
use crate::error::{Argument, UsageError};
use crate::input::InputSource;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the binary has been asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Compare {
        config: Config,
        first: InputSource,
        second: InputSource,
    },
}

/// Parse arguments, not including the program name
///
/// Arguments are taken as OS strings so that any file name is accepted.
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut mode = Mode::default();
    let mut positional: Vec<OsString> = Vec::with_capacity(2);
    let mut options_done = false;

    for arg in args {
        let arg = arg.into();
        let option = match arg.to_str() {
            Some(s) if !options_done && s.starts_with('-') && s != "-" => Some(s.to_string()),
            _ => None,
        };
        match option.as_deref() {
            None => positional.push(arg),
            Some("--") => options_done = true,
            Some("-h" | "--help") => return Ok(Command::Help),
            Some("-v" | "--version") => return Ok(Command::Version),
            Some("-f" | "--file") => mode = Mode::File,
            Some("-n" | "--number") => mode = Mode::Number,
            Some(other) => return Err(UsageError::UnknownOption(other.to_string())),
        }
    }

    if positional.len() < 2 {
        return Err(UsageError::MissingArguments);
    }
    if positional.len() > 2 {
        return Err(UsageError::TooManyArguments);
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next()) {
        (Some(first), Some(second)) => Ok(Command::Compare {
            config: Config::new().with_mode(mode),
            first: InputSource::from_arg(mode, Argument::First, first)?,
            second: InputSource::from_arg(mode, Argument::Second, second)?,
        }),
        _ => Err(UsageError::MissingArguments),
    }
}

/// Help text printed for `-h`/`--help`
pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} [OPTION] ARG1 ARG2

Compute Hamming distance between two files or two hexadecimal numbers
of the arbitrary precision.

ARG1 and ARG2 must be of the same length.

Options:
  -f, --file       Treat arguments as file names (default)
  -n, --number     Treat arguments as hexadecimal numbers
  -h, --help       Print this help message and exit
  -v, --version    Print version and exit
"
    )
}
