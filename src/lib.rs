//! Workspace facade crate.
//!
//! Re-exports the bridge trait surface and maps feature flags to the
//! individual backend crates (`fsbridge-host`, `fsbridge-mem`).
//! Applications depend on `fsbridge`, enable the backend they want, and
//! pick it once at startup; nothing downstream branches on which backend
//! is active.

use std::sync::Arc;

pub use fsbridge_traits::{
    decode_utf8_lossy, ErrorKind, FsBridge, FsBridgeError, FsBridgeSync, ReadOptions, Result,
};

#[cfg(feature = "host")]
pub use fsbridge_host::HostFileSystem;

#[cfg(feature = "mem")]
pub use fsbridge_mem::MemFileSystem;

/// Shared handle to an async filesystem backend.
pub type DynFsBridge = Arc<dyn FsBridge>;

/// Shared handle to a blocking filesystem backend.
pub type DynFsBridgeSync = Arc<dyn FsBridgeSync>;

/// Default backend selection: the host operating system's filesystem.
#[cfg(feature = "host")]
pub fn default_bridge() -> DynFsBridge {
    Arc::new(HostFileSystem::new())
}

/// Blocking counterpart of [`default_bridge`].
#[cfg(feature = "host")]
pub fn default_bridge_sync() -> DynFsBridgeSync {
    Arc::new(HostFileSystem::new())
}
