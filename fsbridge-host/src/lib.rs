//! # Host Filesystem Backend
//!
//! Filesystem bridge backend for the host operating system
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! Implements [`FsBridge`](fsbridge_traits::FsBridge) on `tokio::fs` and
//! [`FsBridgeSync`](fsbridge_traits::FsBridgeSync) on `std::fs`. Every
//! operation is a direct delegation to the native primitive; the OS's own
//! rename collision semantics pass through untouched. Native errors are
//! translated into the shared [`FsBridgeError`](fsbridge_traits::FsBridgeError)
//! vocabulary before they reach the caller.
//!
//! ## Usage
//!
//! ```ignore
//! use fsbridge_host::HostFileSystem;
//! use fsbridge_traits::{FsBridge, ReadOptions};
//!
//! #[tokio::main]
//! async fn main() -> fsbridge_traits::Result<()> {
//!     let fs = HostFileSystem::new();
//!     let text = fs.read_text_file("notes.txt".as_ref(), ReadOptions::default()).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

mod filesystem;

pub use filesystem::HostFileSystem;
