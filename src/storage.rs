//! Key/value slots that hold serialized blobs.
//! The file backend keeps one `<key>.json` file per key inside the memo
//! directory; the memory backend exists for tests and embedding.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Read the blob stored under `key`, `None` when the slot is empty.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Overwrite the slot under `key` with `value`.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        slot_path(&self.dir, key)
    }
}

pub fn slot_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        ensure_dir(&self.dir)?;
        fs::write(self.slot_path(key), value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        Self { slots }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_storage_missing_slot_is_none() {
        let tmp = tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());
        assert_eq!(storage.get("memoryStorage").unwrap(), None);
    }

    #[test]
    fn file_storage_set_then_get() {
        let tmp = tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested"));
        storage.set("memoryStorage", "[]").unwrap();
        assert_eq!(
            storage.get("memoryStorage").unwrap(),
            Some("[]".to_string())
        );
        assert!(tmp.path().join("nested/memoryStorage.json").exists());
    }

    #[test]
    fn memory_storage_overwrites() {
        let mut storage = MemoryStorage::with_slot("k", "old");
        storage.set("k", "new").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("new".to_string()));
        assert_eq!(storage.get("other").unwrap(), None);
    }
}
