//! Error types for the elfscan-core library.
//!
//! Only I/O failures are errors here. A record that does not fit its line
//! format is a normal outcome of scanning and is reported through
//! [`Verdict::Malformed`](crate::cubes::Verdict::Malformed) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for elfscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all elfscan operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open the input file
    #[error("failed to open file '{path}': {source}")]
    FileOpen {
        /// Path to the file that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input stream failed mid-read
    #[error("failed to read input at line {line}: {source}")]
    Read {
        /// One-based number of the line being read when the stream failed
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a new read error
    pub fn read(line: usize, source: std::io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Returns the raw OS error code when the underlying failure carries one
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::FileOpen { source, .. } | Self::Read { source, .. } => source.raw_os_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = Error::file_open(
            "/no/such/input.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("failed to open"));
        assert!(err.to_string().contains("/no/such/input.txt"));
    }

    #[test]
    fn test_read_error_reports_line() {
        let err = Error::read(7, io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert!(err.to_string().contains("line 7"));
        assert_eq!(err.os_code(), None);
    }

    #[test]
    fn test_os_code() {
        let err = Error::read(1, io::Error::from_raw_os_error(5));
        assert_eq!(err.os_code(), Some(5));
    }
}
