//! Error types for the in-memory backend

use std::path::PathBuf;
use thiserror::Error;

pub(crate) type MemResult<T> = Result<T, MemFsError>;

/// Failures raised by the in-memory entry map before translation into the
/// shared bridge vocabulary.
#[derive(Error, Debug)]
pub(crate) enum MemFsError {
    #[error("entry not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error("directory not empty: {}", .0.display())]
    DirectoryNotEmpty(PathBuf),

    #[error("invalid rename from {} to {}", .0.display(), .1.display())]
    InvalidRename(PathBuf, PathBuf),
}

impl From<MemFsError> for fsbridge_traits::FsBridgeError {
    fn from(err: MemFsError) -> Self {
        match err {
            MemFsError::NotFound(path) => fsbridge_traits::FsBridgeError::NotFound { path },
            other => fsbridge_traits::FsBridgeError::OperationFailed(other.to_string()),
        }
    }
}
