//! Input sources and mode dispatch

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{Config, Mode};
use crate::error::{Argument, UsageError};
use crate::file::FileDistance;
use crate::hex::hex_distance;
use crate::Result;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A hex number held in memory
    HexString(String),
    /// A file read from disk
    FilePath(PathBuf),
}

impl InputSource {
    /// Interpret a command line argument according to `mode`
    ///
    /// File paths are taken as-is. Hex numbers must be valid Unicode.
    pub fn from_arg(
        mode: Mode,
        argument: Argument,
        arg: impl Into<OsString>,
    ) -> std::result::Result<Self, UsageError> {
        let arg = arg.into();
        match mode {
            Mode::File => Ok(InputSource::FilePath(PathBuf::from(arg))),
            Mode::Number => arg
                .into_string()
                .map(InputSource::HexString)
                .map_err(|_| UsageError::NonUnicodeNumber(argument)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            InputSource::HexString(_) => Mode::Number,
            InputSource::FilePath(_) => Mode::File,
        }
    }
}

/// Compute the Hamming distance between two inputs of the configured kind
pub fn compare(config: &Config, first: &InputSource, second: &InputSource) -> Result<u64> {
    if first.mode() != config.mode || second.mode() != config.mode {
        return Err(UsageError::MixedInputs.into());
    }
    match (first, second) {
        (InputSource::HexString(a), InputSource::HexString(b)) => hex_distance(a, b),
        (InputSource::FilePath(a), InputSource::FilePath(b)) => compare_files(config, a, b),
        _ => Err(UsageError::MixedInputs.into()),
    }
}

fn compare_files(config: &Config, first: &Path, second: &Path) -> Result<u64> {
    FileDistance::from_config(config)?.compute(first, second)
}
