use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsBridgeError>;

/// Coarse discriminant carried by every [`FsBridgeError`].
///
/// Only a missing entry gets a dedicated kind; all other native failures
/// (permission denial, cross-type rename, directory-not-empty, ...) share
/// the generic kind. New kinds are added here and in the backend mapping
/// tables, never at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path does not name an existing filesystem entry.
    NotFound,
    /// Any other filesystem failure.
    Other,
}

/// Errors surfaced by filesystem bridge operations
#[derive(Error, Debug)]
pub enum FsBridgeError {
    /// Entry does not exist
    #[error("no such file or directory: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Native I/O failure, retained as the error source
    #[error("filesystem error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed rename, retaining both endpoints
    ///
    /// A native `NotFound` here may stem from the source or from a
    /// missing destination parent, so the error keeps both paths rather
    /// than blaming one of them.
    #[error("failed to rename {} to {}: {}", .from.display(), .to.display(), .source)]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend-internal failure
    #[error("filesystem operation failed: {0}")]
    OperationFailed(String),
}

impl FsBridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsBridgeError::NotFound { .. } => ErrorKind::NotFound,
            FsBridgeError::Rename { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorKind::NotFound,
                _ => ErrorKind::Other,
            },
            FsBridgeError::Io { .. } | FsBridgeError::OperationFailed(_) => ErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_its_own_kind() {
        let err = FsBridgeError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
    }

    #[test]
    fn io_and_internal_errors_share_the_generic_kind() {
        let io = FsBridgeError::Io {
            path: PathBuf::from("/some/dir"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let internal = FsBridgeError::OperationFailed("directory not empty".into());

        assert_eq!(io.kind(), ErrorKind::Other);
        assert_eq!(internal.kind(), ErrorKind::Other);
        assert!(!io.is_not_found());
    }

    #[test]
    fn rename_errors_derive_their_kind_from_the_native_code() {
        let missing = FsBridgeError::Rename {
            from: PathBuf::from("/gone"),
            to: PathBuf::from("/dst"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "enoent"),
        };
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let denied = FsBridgeError::Rename {
            from: PathBuf::from("/src"),
            to: PathBuf::from("/dst"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "eacces"),
        };
        assert_eq!(denied.kind(), ErrorKind::Other);
    }

    #[test]
    fn rename_errors_name_both_endpoints() {
        let err = FsBridgeError::Rename {
            from: PathBuf::from("/draft.txt"),
            to: PathBuf::from("/missing/final.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "enoent"),
        };
        let message = err.to_string();
        assert!(message.contains("/draft.txt"));
        assert!(message.contains("/missing/final.txt"));
    }

    #[test]
    fn display_includes_the_path() {
        let err = FsBridgeError::NotFound {
            path: PathBuf::from("/missing/file.txt"),
        };
        assert!(err.to_string().contains("/missing/file.txt"));
    }
}
