//! Host Filesystem Implementation using Tokio and std

use async_trait::async_trait;
use bytes::Bytes;
use fsbridge_traits::{
    error::{FsBridgeError, Result},
    fs::{FsBridge, FsBridgeSync, ReadOptions},
};
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Host OS filesystem backend
///
/// Async operations go through `tokio::fs`, blocking ones through
/// `std::fs`. Holds no state; cheap to construct and share.
#[derive(Debug, Clone, Copy)]
pub struct HostFileSystem;

impl HostFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HostFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a native I/O error into the bridge vocabulary.
///
/// The whole native-code-to-kind table lives here: a missing entry maps
/// to the dedicated `NotFound` kind, everything else stays generic with
/// the native error retained as the source. Extend this match to add
/// kinds; call sites never inspect native errors themselves.
fn map_io_error(path: &Path, err: io::Error) -> FsBridgeError {
    match err.kind() {
        io::ErrorKind::NotFound => FsBridgeError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FsBridgeError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

/// Translate a failed rename, keeping both endpoints.
///
/// `NotFound` can come from the source or from a missing destination
/// parent; the caller derives the kind from the retained native code
/// instead of this layer guessing which path was at fault.
fn map_rename_error(from: &Path, to: &Path, err: io::Error) -> FsBridgeError {
    FsBridgeError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: err,
    }
}

#[async_trait]
impl FsBridge for HostFileSystem {
    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)
            .await
            .map_err(|e| map_rename_error(from, to, e))?;
        debug!(from = ?from, to = ?to, "Renamed entry");
        Ok(())
    }

    async fn read_file(&self, path: &Path, _options: ReadOptions) -> Result<Bytes> {
        let data = fs::read(path).await.map_err(|e| map_io_error(path, e))?;
        debug!(path = ?path, size = data.len(), "Read file");
        Ok(Bytes::from(data))
    }

    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()> {
        fs::write(path, data.as_ref())
            .await
            .map_err(|e| map_io_error(path, e))?;
        debug!(path = ?path, size = data.len(), "Wrote file");
        Ok(())
    }
}

impl FsBridgeSync for HostFileSystem {
    fn rename_sync(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::rename(from, to).map_err(|e| map_rename_error(from, to, e))?;
        debug!(from = ?from, to = ?to, "Renamed entry");
        Ok(())
    }

    fn read_file_sync(&self, path: &Path) -> Result<Bytes> {
        let data = std::fs::read(path).map_err(|e| map_io_error(path, e))?;
        debug!(path = ?path, size = data.len(), "Read file");
        Ok(Bytes::from(data))
    }

    fn write_file_sync(&self, path: &Path, data: Bytes) -> Result<()> {
        std::fs::write(path, data.as_ref()).map_err(|e| map_io_error(path, e))?;
        debug!(path = ?path, size = data.len(), "Wrote file");
        Ok(())
    }
}
