//! Configuration for distance computations
//!
//! Holds the comparison mode selected by the caller and the chunk size
//! used when streaming files.

use crate::error::{ConfigError, ConfigResult};

/// Chunk size used for both streams in file mode
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// How the two arguments are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Arguments are paths to files of equal size
    #[default]
    File,
    /// Arguments are hex numbers of equal length
    Number,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Comparison mode
    pub mode: Mode,
    /// Bytes read per chunk from each file
    pub chunk_size: usize,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
