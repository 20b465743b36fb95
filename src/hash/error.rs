// Centralized error handling module
// Error types with path and operation context for the file layer

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for file hashing, reports and configuration
///
/// The hashing core itself only returns `io::Error`; this type adds the
/// context of which file was being handled and what was being done to it.
#[derive(Debug)]
pub enum HashUtilityError {
    /// File system errors with context
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Input rejected by the minimum size policy
    FileTooSmall { path: PathBuf, size: u64, minimum: u64 },

    /// Report errors
    ReportWriteError { path: PathBuf, reason: String },

    /// Configuration errors
    ConfigParseError { path: PathBuf, reason: String },
}

impl fmt::Display for HashUtilityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashUtilityError::FileNotFound { path } => {
                write!(f, "File not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            HashUtilityError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied while {} file: {}\n", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            HashUtilityError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} file {}: {}\n", operation, p.display(), source)?;
                } else {
                    write!(f, "I/O error while {}: {}\n", operation, source)?;
                }
                write!(f, "Suggestion: Check that the input is readable and was not removed while hashing")
            }
            HashUtilityError::FileTooSmall { path, size, minimum } => {
                write!(
                    f,
                    "File is too small: {} is {}, minimum is {}\n",
                    path.display(),
                    humansize::format_size(*size, humansize::BINARY),
                    humansize::format_size(*minimum, humansize::BINARY),
                )?;
                write!(f, "Suggestion: Pick a larger file or lower the limit with --min-size")
            }
            HashUtilityError::ReportWriteError { path, reason } => {
                write!(f, "Failed to write hash report {}: {}\n", path.display(), reason)?;
                write!(f, "Suggestion: Check disk space and write permissions of the output directory")
            }
            HashUtilityError::ConfigParseError { path, reason } => {
                write!(f, "Error reading configuration {}: {}\n", path.display(), reason)?;
                write!(f, "Suggestion: Check the TOML syntax and field names in the configuration file")
            }
        }
    }
}

impl std::error::Error for HashUtilityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashUtilityError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl HashUtilityError {
    /// Create an error from an io::Error with context about the operation and optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(path)) => HashUtilityError::FileNotFound { path },
            (io::ErrorKind::PermissionDenied, Some(path)) => HashUtilityError::PermissionDenied {
                path,
                operation: operation.to_string(),
            },
            (_, path) => HashUtilityError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

// Default From implementation for io::Error (without context)
impl From<io::Error> for HashUtilityError {
    fn from(err: io::Error) -> Self {
        HashUtilityError::from_io_error(err, "unknown operation", None)
    }
}
