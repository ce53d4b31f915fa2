//! # hdist
//!
//! Hamming distance between two equal-length inputs: either two hex
//! numbers of arbitrary precision or two files of the same size. Files
//! are streamed in fixed-size chunks so memory use does not grow with
//! input size.
//!

pub mod bitdiff;
pub mod cli;
pub mod config;
pub mod error;
pub mod file;
pub mod hex;
pub mod input;

#[cfg(test)]
mod tests;

pub use bitdiff::{byte_diff, nibble_diff, slice_diff};
pub use config::{Config, Mode, DEFAULT_CHUNK_SIZE};
pub use error::{Argument, ConfigError, DistanceError, StreamError, UsageError};
pub use file::{file_distance, FileDistance};
pub use hex::hex_distance;
pub use input::{compare, InputSource};

/// Result type for distance computations
pub type Result<T> = std::result::Result<T, DistanceError>;
