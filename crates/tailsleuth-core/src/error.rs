//! Error type for the core crate.
//!
//! Numerical edge cases (empty windows, single-sample variance) never
//! surface here; they are resolved by policy inside [`crate::rate`].
use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No files were found where at least one was expected.
    ///
    /// Informational: frontends report it and exit successfully.
    #[error("No log files found in {}", .0.display())]
    DirectoryEmpty(PathBuf),

    /// Opening, seeking, or reading the target file failed.
    #[error("cannot read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the event stream failed.
    #[error("failed to read input stream: {0}")]
    Input(#[source] io::Error),

    /// Writing to the primary or status stream failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read or parsed.
    #[error("cannot load config file {}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is informational rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::DirectoryEmpty(_))
    }

    /// Whether this error is a closed downstream pipe on an output stream.
    ///
    /// Frontends treat this as a normal end of the command (`tailsleuth tail
    /// | head` closes stdout early).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
