//! # In-Memory Filesystem Backend
//!
//! Filesystem bridge backend backed by an in-process entry map. Useful as
//! the substitute implementation in tests and in environments without a
//! real filesystem.
//!
//! ## Path Handling
//!
//! Paths are normalized to absolute, forward-slash strings before lookup;
//! the root directory is `/` and always exists. No symbolic links.
//!
//! ## Rename Semantics
//!
//! POSIX-like: a file replaces an existing file, a directory replaces an
//! existing empty directory, every other collision fails. A missing
//! source surfaces the `NotFound` kind, matching the host backend.

mod error;
mod filesystem;

pub use filesystem::MemFileSystem;
