//! Error types for the distance engine
//!
//! Every failure is reported eagerly to the immediate caller; nothing is
//! retried or downgraded to a partial result.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two compared inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// The first input (argument 1)
    First,
    /// The second input (argument 2)
    Second,
}

impl Argument {
    /// 1-based argument number as shown to users
    pub fn number(self) -> u8 {
        match self {
            Argument::First => 1,
            Argument::Second => 2,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Main error type for distance computations
#[derive(Debug, Error)]
pub enum DistanceError {
    /// Command line usage errors
    #[error("{0}")]
    Usage(#[from] UsageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The inputs differ in length (hex characters or file bytes)
    #[error("lengths of the arguments are different.")]
    LengthMismatch { first: u64, second: u64 },

    /// A non-hex character was found while decoding in number mode
    #[error("non-hex character at position {position} in the argument {argument}")]
    InvalidCharacter {
        argument: Argument,
        /// 1-based position of the offending character
        position: usize,
        character: char,
    },

    /// Open, stat or read failure on a named path
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Argument and mode errors raised before any comparison starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing required arguments")]
    MissingArguments,

    #[error("too many arguments")]
    TooManyArguments,

    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    /// Inputs are not both of the kind the comparison mode expects
    #[error("inputs do not match the comparison mode")]
    MixedInputs,

    /// A hex number argument that is not valid Unicode
    #[error("non-unicode hex number in the argument {0}")]
    NonUnicodeNumber(Argument),
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}

/// I/O failure on one side of a reader-level comparison
#[derive(Debug, Error)]
#[error("read error in the argument {argument}: {source}")]
pub struct StreamError {
    pub argument: Argument,
    #[source]
    pub source: io::Error,
}

impl StreamError {
    pub(crate) fn new(argument: Argument, source: io::Error) -> Self {
        Self { argument, source }
    }
}

impl DistanceError {
    /// Whether the error stems from how the tool was invoked
    pub fn is_usage(&self) -> bool {
        matches!(self, DistanceError::Usage(_))
    }
}

/// Specialized result type for configuration handling
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
