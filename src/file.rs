//! Hamming distance between two files of equal size
//!
//! Files are never loaded whole. Both are read in lockstep in chunks of
//! the same size and each pair of chunks is folded into the running total
//! before the next pair is read, so memory use is bounded by two chunk
//! buffers whatever the file size.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, trace};

use crate::bitdiff::slice_diff;
use crate::config::{Config, DEFAULT_CHUNK_SIZE};
use crate::error::{Argument, ConfigError, ConfigResult, DistanceError, StreamError};
use crate::Result;

/// Streaming file comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDistance {
    chunk_size: usize,
}

impl FileDistance {
    /// Comparator with the default 4 KiB chunk size
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Comparator reading `chunk_size` bytes per step from each input
    pub fn with_chunk_size(chunk_size: usize) -> ConfigResult<Self> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(Self { chunk_size })
    }

    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        config.validate()?;
        Self::with_chunk_size(config.chunk_size)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Compute the number of differing bits between two files
    ///
    /// Both files are opened and their sizes compared before any byte is
    /// read. Handles are closed on every return path.
    pub fn compute(&self, path1: &Path, path2: &Path) -> Result<u64> {
        let file1 = open(path1)?;
        let file2 = open(path2)?;
        let len1 = size_of(&file1, path1)?;
        let len2 = size_of(&file2, path2)?;

        if len1 != len2 {
            return Err(DistanceError::LengthMismatch {
                first: len1,
                second: len2,
            });
        }

        debug!(
            "comparing {} and {} ({} bytes, chunk size {})",
            path1.display(),
            path2.display(),
            len1,
            self.chunk_size
        );

        self.compare_readers(file1, file2, len1).map_err(|err| {
            let path = match err.argument {
                Argument::First => path1,
                Argument::Second => path2,
            };
            DistanceError::Io {
                path: path.to_path_buf(),
                source: err.source,
            }
        })
    }

    /// Compare exactly `len` bytes from each of two readers
    ///
    /// A reader that runs dry before `len` bytes is an error, as is any
    /// read failure other than an interrupted call. Bytes past `len` are
    /// not read.
    pub fn compare_readers<A: Read, B: Read>(
        &self,
        mut first: A,
        mut second: B,
        len: u64,
    ) -> std::result::Result<u64, StreamError> {
        let buf_len = usize::try_from(len).map_or(self.chunk_size, |l| l.min(self.chunk_size));
        let mut buf1 = vec![0u8; buf_len];
        let mut buf2 = vec![0u8; buf_len];

        let mut remaining = len;
        let mut distance = 0u64;
        let mut chunks = 0u64;

        while remaining > 0 {
            let n = usize::try_from(remaining).map_or(buf_len, |r| r.min(buf_len));

            fill_chunk(&mut first, &mut buf1[..n])
                .map_err(|e| StreamError::new(Argument::First, e))?;
            fill_chunk(&mut second, &mut buf2[..n])
                .map_err(|e| StreamError::new(Argument::Second, e))?;

            distance += slice_diff(&buf1[..n], &buf2[..n]);
            remaining -= n as u64;
            chunks += 1;
            trace!("chunk {}: {} bytes, running distance {}", chunks, n, distance);
        }

        debug!("file distance over {} bytes in {} chunks: {}", len, chunks, distance);
        Ok(distance)
    }
}

impl Default for FileDistance {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the distance between two files with the default chunk size
pub fn file_distance(path1: &Path, path2: &Path) -> Result<u64> {
    FileDistance::new().compute(path1, path2)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DistanceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn size_of(file: &File, path: &Path) -> Result<u64> {
    file.metadata()
        .map(|meta| meta.len())
        .map_err(|source| DistanceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Fill `buf` completely, looping over short reads
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before its reported size was read",
                ))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
