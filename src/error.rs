//! Error types for hello-echo operations.
//!
//! Provides the error hierarchy using `thiserror` for file access, line
//! reading, and option validation. Library code never terminates the
//! process; every failure propagates as an [`Error`] up to the binary
//! entry point.

use thiserror::Error;

/// Result type alias for echo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for echo operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file access, reading, output).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Configuration errors (invalid option values).
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error is a broken pipe on the output stream.
    ///
    /// The entry point treats a reader that went away (e.g. piping into
    /// `head`) as a clean early stop rather than a failure.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Io(IoError::WriteFailed { source })
                if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}

/// I/O-specific errors for the echo pipeline.
#[derive(Error, Debug)]
pub enum IoError {
    /// Input file could not be opened.
    ///
    /// Covers missing files, permission denial, and any other OS-level
    /// open error; the OS reason text is carried verbatim.
    #[error("cannot open {path}: {reason}")]
    OpenFailed {
        /// Path that failed to open.
        path: String,
        /// OS-derived reason for the failure.
        reason: String,
    },

    /// Read failed after a successful open.
    #[error("failed to read {path}: {reason}")]
    ReadFailed {
        /// Path being read.
        path: String,
        /// Reason for the failure.
        reason: String,
    },

    /// Input is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte offset {offset}")]
    InvalidUtf8 {
        /// Path being read.
        path: String,
        /// Absolute byte offset of the first invalid byte.
        offset: u64,
    },

    /// Write to the output stream failed.
    #[error("failed to write output: {source}")]
    WriteFailed {
        /// Underlying write error, kept so the caller can inspect the kind.
        #[source]
        source: std::io::Error,
    },
}
