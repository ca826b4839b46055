//! In-Memory Filesystem Implementation
//!
//! Entries live in a single ordered map keyed by normalized absolute
//! path, a directory being a key with no content and its children being
//! the keys under its prefix. All operations take the map lock for their
//! full duration, so each call is atomic with respect to the others.

use async_trait::async_trait;
use bytes::Bytes;
use fsbridge_traits::{
    error::Result,
    fs::{FsBridge, FsBridgeSync, ReadOptions},
};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use std::sync::RwLock;
use tracing::debug;

use crate::error::{MemFsError, MemResult};

#[derive(Debug, Clone)]
enum Entry {
    File(Bytes),
    Directory,
}

impl Entry {
    fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory)
    }
}

type EntryMap = BTreeMap<String, Entry>;

/// In-memory filesystem backend
///
/// Owns a single entry map; wrap the value in an `Arc` to share it
/// across tasks.
#[derive(Debug)]
pub struct MemFileSystem {
    entries: RwLock<EntryMap>,
}

/// Normalize a path to an absolute forward-slash string key.
///
/// Relative paths are resolved against the root, `.` segments drop out
/// and `..` pops. The root itself is `/`.
fn normalize(path: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => segments.clear(),
            Component::CurDir => {}
            Component::ParentDir => {
                segments.pop();
            }
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn parent_key(key: &str) -> String {
    match key.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => key[..idx].to_string(),
    }
}

fn has_children(map: &EntryMap, key: &str) -> bool {
    let prefix = format!("{key}/");
    map.range(prefix.clone()..)
        .next()
        .is_some_and(|(k, _)| k.starts_with(&prefix))
}

fn require_parent_dir(map: &EntryMap, key: &str) -> MemResult<()> {
    let parent = parent_key(key);
    match map.get(&parent) {
        Some(entry) if entry.is_dir() => Ok(()),
        Some(_) => Err(MemFsError::NotADirectory(parent.into())),
        None => Err(MemFsError::NotFound(parent.into())),
    }
}

impl MemFileSystem {
    /// Create an empty filesystem containing only the root directory.
    pub fn new() -> Self {
        let mut entries = EntryMap::new();
        entries.insert("/".to_string(), Entry::Directory);
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Create a directory and all missing ancestors.
    ///
    /// Backend-specific setup hook; the bridge traits expose no mkdir.
    pub fn create_dir_all(&self, path: &Path) -> Result<()> {
        let key = normalize(path);
        let mut map = self.lock_write();
        let mut current = String::new();
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            current.push('/');
            current.push_str(segment);
            match map.get(&current) {
                Some(entry) if entry.is_dir() => {}
                Some(_) => {
                    return Err(MemFsError::NotADirectory(current.into()).into());
                }
                None => {
                    map.insert(current.clone(), Entry::Directory);
                }
            }
        }
        Ok(())
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, EntryMap> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, EntryMap> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    fn rename_impl(&self, from: &Path, to: &Path) -> MemResult<()> {
        let from_key = normalize(from);
        let to_key = normalize(to);
        let mut map = self.lock_write();

        let source = map
            .get(&from_key)
            .ok_or_else(|| MemFsError::NotFound(from_key.clone().into()))?
            .clone();

        // The root can be neither renamed nor replaced.
        if from_key == "/" || to_key == "/" {
            return Err(MemFsError::InvalidRename(from_key.into(), to_key.into()));
        }
        if from_key == to_key {
            return Ok(());
        }
        // A directory cannot move into its own subtree.
        if to_key.starts_with(&format!("{from_key}/")) {
            return Err(MemFsError::InvalidRename(from_key.into(), to_key.into()));
        }
        require_parent_dir(&map, &to_key)?;

        let dest_is_dir = map.get(&to_key).map(Entry::is_dir);
        match (source.is_dir(), dest_is_dir) {
            (_, None) => {}
            (false, Some(true)) => {
                return Err(MemFsError::IsADirectory(to_key.into()));
            }
            (false, Some(false)) => {}
            (true, Some(false)) => {
                return Err(MemFsError::NotADirectory(to_key.into()));
            }
            (true, Some(true)) => {
                if has_children(&map, &to_key) {
                    return Err(MemFsError::DirectoryNotEmpty(to_key.into()));
                }
                map.remove(&to_key);
            }
        }

        if source.is_dir() {
            let prefix = format!("{from_key}/");
            let moved: Vec<(String, Entry)> = map
                .range(prefix.clone()..)
                .take_while(|(k, _)| k.starts_with(&prefix))
                .map(|(k, v)| (format!("{to_key}/{}", &k[prefix.len()..]), v.clone()))
                .collect();
            let old_keys: Vec<String> = map
                .range(prefix.clone()..)
                .take_while(|(k, _)| k.starts_with(&prefix))
                .map(|(k, _)| k.clone())
                .collect();
            for key in old_keys {
                map.remove(&key);
            }
            map.extend(moved);
        }
        map.remove(&from_key);
        map.insert(to_key.clone(), source);

        debug!(from = %from_key, to = %to_key, "Renamed entry");
        Ok(())
    }

    fn read_impl(&self, path: &Path) -> MemResult<Bytes> {
        let key = normalize(path);
        let map = self.lock_read();
        match map.get(&key) {
            None => Err(MemFsError::NotFound(key.into())),
            Some(Entry::Directory) => Err(MemFsError::IsADirectory(key.into())),
            Some(Entry::File(data)) => {
                debug!(path = %key, size = data.len(), "Read file");
                Ok(data.clone())
            }
        }
    }

    fn write_impl(&self, path: &Path, data: Bytes) -> MemResult<()> {
        let key = normalize(path);
        let mut map = self.lock_write();
        require_parent_dir(&map, &key)?;
        if let Some(Entry::Directory) = map.get(&key) {
            return Err(MemFsError::IsADirectory(key.into()));
        }
        debug!(path = %key, size = data.len(), "Wrote file");
        map.insert(key, Entry::File(data));
        Ok(())
    }
}

impl Default for MemFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsBridge for MemFileSystem {
    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        Ok(self.rename_impl(from, to)?)
    }

    async fn read_file(&self, path: &Path, _options: ReadOptions) -> Result<Bytes> {
        Ok(self.read_impl(path)?)
    }

    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()> {
        Ok(self.write_impl(path, data)?)
    }
}

impl FsBridgeSync for MemFileSystem {
    fn rename_sync(&self, from: &Path, to: &Path) -> Result<()> {
        Ok(self.rename_impl(from, to)?)
    }

    fn read_file_sync(&self, path: &Path) -> Result<Bytes> {
        Ok(self.read_impl(path)?)
    }

    fn write_file_sync(&self, path: &Path, data: Bytes) -> Result<()> {
        Ok(self.write_impl(path, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsbridge_traits::ErrorKind;

    fn seeded() -> MemFileSystem {
        let fs = MemFileSystem::new();
        fs.create_dir_all(Path::new("/docs/archive")).unwrap();
        fs.write_file_sync(Path::new("/docs/readme.txt"), Bytes::from_static(b"hello"))
            .unwrap();
        fs
    }

    #[test]
    fn normalize_resolves_relative_and_dot_segments() {
        assert_eq!(normalize(Path::new("/")), "/");
        assert_eq!(normalize(Path::new("a/b")), "/a/b");
        assert_eq!(normalize(Path::new("/a/./b/../c")), "/a/c");
        assert_eq!(normalize(Path::new("/a/b/")), "/a/b");
    }

    #[test]
    fn read_back_what_was_written() {
        let fs = seeded();
        let data = fs.read_file_sync(Path::new("/docs/readme.txt")).unwrap();
        assert_eq!(data.as_ref(), b"hello");
    }

    #[tokio::test]
    async fn async_text_round_trip() {
        let fs = seeded();
        fs.write_text_file(Path::new("/docs/note.txt"), "grüße")
            .await
            .unwrap();
        let text = fs
            .read_text_file(Path::new("/docs/note.txt"), ReadOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "grüße");
    }

    #[test]
    fn missing_entry_reads_as_not_found() {
        let fs = seeded();
        let err = fs.read_file_sync(Path::new("/docs/absent")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn reading_a_directory_fails_generically() {
        let fs = seeded();
        let err = fs.read_text_file_sync(Path::new("/docs")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn write_requires_an_existing_parent_directory() {
        let fs = MemFileSystem::new();
        let err = fs
            .write_file_sync(Path::new("/no/such/dir.txt"), Bytes::from_static(b"x"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn rename_moves_file_and_clears_source() {
        let fs = seeded();
        fs.rename_sync(
            Path::new("/docs/readme.txt"),
            Path::new("/docs/archive/readme.txt"),
        )
        .unwrap();

        assert!(fs.read_file_sync(Path::new("/docs/readme.txt")).is_err());
        let data = fs
            .read_file_sync(Path::new("/docs/archive/readme.txt"))
            .unwrap();
        assert_eq!(data.as_ref(), b"hello");
    }

    #[test]
    fn rename_missing_source_is_not_found() {
        let fs = seeded();
        let err = fs
            .rename_sync(Path::new("/docs/ghost"), Path::new("/docs/dst"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn rename_file_onto_directory_fails() {
        let fs = seeded();
        let err = fs
            .rename_sync(Path::new("/docs/readme.txt"), Path::new("/docs/archive"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn rename_directory_onto_file_fails() {
        let fs = seeded();
        let err = fs
            .rename_sync(Path::new("/docs/archive"), Path::new("/docs/readme.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn rename_directory_onto_empty_directory_replaces_it() {
        let fs = seeded();
        fs.create_dir_all(Path::new("/staging")).unwrap();
        fs.write_file_sync(Path::new("/staging/item.txt"), Bytes::from_static(b"s"))
            .unwrap();

        fs.rename_sync(Path::new("/staging"), Path::new("/docs/archive"))
            .unwrap();

        let data = fs
            .read_file_sync(Path::new("/docs/archive/item.txt"))
            .unwrap();
        assert_eq!(data.as_ref(), b"s");
        assert!(fs.read_file_sync(Path::new("/staging/item.txt")).is_err());
    }

    #[test]
    fn rename_directory_onto_non_empty_directory_fails() {
        let fs = seeded();
        fs.create_dir_all(Path::new("/staging")).unwrap();

        let err = fs
            .rename_sync(Path::new("/staging"), Path::new("/docs"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[tokio::test]
    async fn rename_directory_moves_descendants() {
        let fs = seeded();
        fs.rename(Path::new("/docs"), Path::new("/library"))
            .await
            .unwrap();

        let text = fs
            .read_text_file(Path::new("/library/readme.txt"), ReadOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "hello");
        assert!(fs
            .read_file(Path::new("/docs/readme.txt"), ReadOptions::default())
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn renaming_the_root_fails_and_leaves_entries_intact() {
        let fs = seeded();
        let err = fs
            .rename_sync(Path::new("/"), Path::new("/elsewhere"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);

        // The map is untouched: existing entries stay reachable and
        // their directories still accept writes.
        let data = fs.read_file_sync(Path::new("/docs/readme.txt")).unwrap();
        assert_eq!(data.as_ref(), b"hello");
        fs.write_file_sync(Path::new("/docs/fresh.txt"), Bytes::from_static(b"f"))
            .unwrap();
    }

    #[test]
    fn rename_into_own_subtree_fails() {
        let fs = seeded();
        let err = fs
            .rename_sync(Path::new("/docs"), Path::new("/docs/archive/docs"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
