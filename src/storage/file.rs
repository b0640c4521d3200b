use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Storage;

/// File-backed storage: each key maps to `<dir>/<key>.json`.
///
/// The desktop stand-in for the browser's local storage the app originally
/// ran against.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates the backing directory if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage entry: {}", key))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write storage entry: {}", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage entry: {}", key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set("session", r#"{"name":"A"}"#).unwrap();
        assert_eq!(
            storage.get("session").unwrap().as_deref(),
            Some(r#"{"name":"A"}"#)
        );
        assert!(dir.path().join("session.json").exists());
    }

    #[test]
    fn test_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("accounts").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.remove("accounts").unwrap();
    }

    #[test]
    fn test_remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set("session", "{}").unwrap();
        storage.remove("session").unwrap();
        assert!(!dir.path().join("session.json").exists());
    }
}
