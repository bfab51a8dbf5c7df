// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the directory picker, the image lister and settings
//! persistence.
//!
//! Every variant is local to a single call and recoverable by re-issuing the
//! operation. Wrapped OS and host errors are kept behind `Arc` so the error
//! stays `Clone` and can travel inside Iced messages.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Boxed cause reported by a host dialog implementation.
pub type HostCause = Arc<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub enum Error {
    /// The service was used before a host context was attached.
    NotInitialized,

    /// The native directory dialog failed.
    DialogError(HostCause),

    /// The user closed the directory dialog without choosing anything.
    NoSelection,

    /// An empty directory path was supplied.
    InvalidArgument,

    /// The path could not be inspected (missing, permission denied, ...).
    AccessError {
        path: PathBuf,
        source: Arc<io::Error>,
    },

    /// The path exists but is not a directory.
    NotADirectory(PathBuf),

    /// The directory exists but its entries could not be enumerated.
    ReadError {
        path: PathBuf,
        source: Arc<io::Error>,
    },

    /// The directory was read but contains no supported image file.
    NoImagesFound(PathBuf),

    /// Settings file could not be parsed or serialized.
    Config(String),

    /// Settings file could not be read or written.
    Io(String),
}

/// Fieldless discriminant of [`Error`], for matching without caring about
/// the attached path or cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotInitialized,
    DialogError,
    NoSelection,
    InvalidArgument,
    AccessError,
    NotADirectory,
    ReadError,
    NoImagesFound,
    Config,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotInitialized => ErrorKind::NotInitialized,
            Error::DialogError(_) => ErrorKind::DialogError,
            Error::NoSelection => ErrorKind::NoSelection,
            Error::InvalidArgument => ErrorKind::InvalidArgument,
            Error::AccessError { .. } => ErrorKind::AccessError,
            Error::NotADirectory(_) => ErrorKind::NotADirectory,
            Error::ReadError { .. } => ErrorKind::ReadError,
            Error::NoImagesFound(_) => ErrorKind::NoImagesFound,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::NotInitialized => "error-not-initialized",
            Error::DialogError(_) => "error-dialog",
            Error::NoSelection => "error-no-selection",
            Error::InvalidArgument => "error-invalid-argument",
            Error::AccessError { .. } => "error-access",
            Error::NotADirectory(_) => "error-not-a-directory",
            Error::ReadError { .. } => "error-read",
            Error::NoImagesFound(_) => "error-no-images-found",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }

    /// Short detail suitable for the `$detail` argument of the localized
    /// message (the offending path, or the underlying cause).
    pub fn detail(&self) -> Option<String> {
        match self {
            Error::DialogError(cause) => Some(cause.to_string()),
            Error::AccessError { path, source } | Error::ReadError { path, source } => {
                Some(format!("{}: {}", path.display(), source))
            }
            Error::NotADirectory(path) | Error::NoImagesFound(path) => {
                Some(path.display().to_string())
            }
            Error::Config(msg) | Error::Io(msg) => Some(msg.clone()),
            Error::NotInitialized | Error::NoSelection | Error::InvalidArgument => None,
        }
    }

    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::AccessError {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ReadError {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "Host context is not initialized"),
            Error::DialogError(e) => write!(f, "Directory dialog error: {}", e),
            Error::NoSelection => write!(f, "No directory selected"),
            Error::InvalidArgument => write!(f, "No directory path given"),
            Error::AccessError { path, source } => {
                write!(f, "Cannot access {}: {}", path.display(), source)
            }
            Error::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
            Error::ReadError { path, source } => {
                write!(f, "Cannot read directory {}: {}", path.display(), source)
            }
            Error::NoImagesFound(path) => {
                write!(f, "No image files found in {}", path.display())
            }
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DialogError(cause) => Some(cause.as_ref()),
            Error::AccessError { source, .. } | Error::ReadError { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
