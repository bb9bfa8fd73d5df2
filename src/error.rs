use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a filter run. The `Display` text is what gets printed to the user.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("time-start must not be later than time-end")]
    InvalidRange,

    #[error("address mask must be between 0 and 32, got {0}")]
    InvalidMask(u8),

    #[error("log file or directory does not exist: {}", path.display())]
    LogNotFound { path: PathBuf },

    #[error("unexpected error while reading the log file: {0}")]
    LogRead(#[source] io::Error),

    #[error("output directory does not exist")]
    OutputDirectoryNotFound,

    #[error("output file name is too long")]
    OutputPathTooLong,

    #[error("unexpected error while saving the result")]
    OutputWrite(#[source] io::Error),
}
