//! Inventory error model.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Mutators never fail; only table ordering and file/stream IO do.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An argument was not one of the accepted values (e.g. an unknown sort order).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The import source does not exist.
    #[error("resource not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing a resource failed.
    #[error("io failure on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Classify an IO error raised while reading `path`.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// IO error raised while writing `path`. Never classified as `NotFound`.
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// IO error on a stream with no filesystem path (stdout, in-memory writers).
    pub fn stream(source: io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<stream>"),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
