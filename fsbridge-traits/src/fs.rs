//! Filesystem Operation Traits
//!
//! Defines the operation surface every filesystem backend implements, in an
//! async flavor ([`FsBridge`]) and a blocking flavor ([`FsBridgeSync`]).
//! Text reads and writes are provided methods layered on the byte
//! primitives, so each backend only supplies raw byte I/O and rename; the
//! byte primitive's error handling (including native-error translation) is
//! reused without being restated.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;

use crate::error::Result;

/// Options forwarded to the byte-read primitive.
///
/// The bridge layer recognizes no flags of its own; the struct exists as
/// the forwarding point so backend-specific read flags can be added
/// without changing the trait surface.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {}

/// Decode bytes as UTF-8, substituting invalid sequences with U+FFFD.
///
/// Lenient by contract: a text read never fails on malformed bytes, only
/// on the underlying byte read. Valid UTF-8 reuses the input buffer
/// without copying; only malformed input pays for a rewrite.
pub fn decode_utf8_lossy(bytes: impl Into<Vec<u8>>) -> String {
    match String::from_utf8(bytes.into()) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Async filesystem backend
///
/// Each operation is a single delegation to the backend's native
/// primitive: no retries, no added concurrency, no cancellation surface.
/// Ordering between concurrent calls is whatever the underlying
/// filesystem provides.
///
/// # Example
///
/// ```ignore
/// use fsbridge_traits::fs::{FsBridge, ReadOptions};
///
/// async fn load_config(fs: &dyn FsBridge) -> fsbridge_traits::Result<String> {
///     fs.read_text_file("config.toml".as_ref(), ReadOptions::default()).await
/// }
/// ```
#[async_trait]
pub trait FsBridge: Send + Sync {
    /// Rename the entry at `from` to `to`.
    ///
    /// Outcomes for colliding destinations (file onto directory, directory
    /// onto directory, ...) are the backend's native semantics, passed
    /// through untouched. A missing source fails with the
    /// [`NotFound`](crate::ErrorKind::NotFound) kind.
    async fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Read the entire byte content of the file at `path`.
    async fn read_file(&self, path: &Path, options: ReadOptions) -> Result<Bytes>;

    /// Write `data` to the file at `path`, replacing any existing content.
    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()>;

    /// Read the file at `path` and decode it as UTF-8.
    ///
    /// Invalid sequences are substituted, so the only failures are those
    /// of [`read_file`](Self::read_file).
    async fn read_text_file(&self, path: &Path, options: ReadOptions) -> Result<String> {
        let bytes = self.read_file(path, options).await?;
        Ok(decode_utf8_lossy(bytes))
    }

    /// Write UTF-8 text to the file at `path`.
    async fn write_text_file(&self, path: &Path, text: &str) -> Result<()> {
        self.write_file(path, Bytes::copy_from_slice(text.as_bytes()))
            .await
    }
}

/// Blocking counterpart of [`FsBridge`].
///
/// Same contract, same error vocabulary; each call blocks the current
/// thread until the native primitive returns. The blocking text read takes
/// no options.
pub trait FsBridgeSync: Send + Sync {
    /// Rename the entry at `from` to `to`, blocking.
    fn rename_sync(&self, from: &Path, to: &Path) -> Result<()>;

    /// Read the entire byte content of the file at `path`, blocking.
    fn read_file_sync(&self, path: &Path) -> Result<Bytes>;

    /// Write `data` to the file at `path`, blocking.
    fn write_file_sync(&self, path: &Path, data: Bytes) -> Result<()>;

    /// Read the file at `path` and decode it as UTF-8, blocking.
    fn read_text_file_sync(&self, path: &Path) -> Result<String> {
        let bytes = self.read_file_sync(path)?;
        Ok(decode_utf8_lossy(bytes))
    }

    /// Write UTF-8 text to the file at `path`, blocking.
    fn write_text_file_sync(&self, path: &Path, text: &str) -> Result<()> {
        self.write_file_sync(path, Bytes::copy_from_slice(text.as_bytes()))
    }
}
