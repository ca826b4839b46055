//! # Filesystem Bridge Traits
//!
//! Contract between callers and the per-backend filesystem implementations.
//!
//! ## Overview
//!
//! This crate defines the filesystem operations that every backend must
//! provide, plus the error vocabulary all of them surface. A backend is
//! selected once at startup and injected wherever filesystem access is
//! needed; call sites never branch on which backend is active.
//!
//! ## Traits
//!
//! - [`FsBridge`](fs::FsBridge) - Async rename, byte/text reads, writes
//! - [`FsBridgeSync`](fs::FsBridgeSync) - Blocking counterparts of the same
//!   operations
//!
//! ## Backends
//!
//! | Backend | Implementation Crate |
//! |---------|---------------------|
//! | Host OS | `fsbridge-host`     |
//! | In-memory | `fsbridge-mem`    |
//!
//! ## Error Handling
//!
//! All operations return [`FsBridgeError`](error::FsBridgeError). Backend
//! implementations must:
//!
//! - Translate native errors into `FsBridgeError` before surfacing them,
//!   so callers see one error vocabulary regardless of backend
//! - Report a missing entry as the [`NotFound`](error::ErrorKind::NotFound)
//!   kind; every other failure carries the generic kind
//! - Never retry or recover internally; failures surface immediately
//!
//! ## Thread Safety
//!
//! Both traits require `Send + Sync` so a backend can be shared across
//! async tasks behind an `Arc`.

pub mod error;
pub mod fs;

pub use error::{ErrorKind, FsBridgeError, Result};
pub use fs::{decode_utf8_lossy, FsBridge, FsBridgeSync, ReadOptions};
