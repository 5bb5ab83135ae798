//! Error type for the I/O layer
//!
//! Core errors pass through unchanged so the caller sees the exact format or
//! dimension failure; this layer only adds the failures the core cannot have
//! (file I/O, the entry-count bound, JSON).

use spmat_core::MatrixError;

/// Errors from loading, rendering, or combining matrices
#[derive(Debug)]
pub enum Error {
    /// File could not be read or written
    Io(std::io::Error),
    /// Core format or dimension error, propagated unchanged
    Matrix(MatrixError),
    /// Loader entry-count bound exceeded
    TooManyEntries { limit: usize, found: usize },
    /// JSON serialization or deserialization failure
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{err}"),
            Error::Matrix(err) => write!(f, "{err}"),
            Error::TooManyEntries { limit, found } => {
                write!(f, "Matrix has {found} entries, limit is {limit}")
            }
            #[cfg(feature = "serde")]
            Error::Json(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            #[cfg(feature = "serde")]
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<MatrixError> for Error {
    fn from(err: MatrixError) -> Self {
        Error::Matrix(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Result type for I/O layer operations
pub type Result<T> = std::result::Result<T, Error>;
