//! Injected key-value persistence for UI flags (banner dismissal,
//! onboarding completion). Read synchronously before first render; the
//! table controller never touches this.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Flag key: the "what's new" banner was dismissed.
pub const BANNER_DISMISSED: &str = "banner_dismissed";
/// Flag key: the onboarding wizard reached completion.
pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;

    fn get_bool(&self, key: &str) -> bool {
        self.get(key).as_deref() == Some("true")
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}

/// In-process store, the default for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Flags persisted as a JSON document. Loaded once at construction,
/// written through on every mutation.
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create) a store at an explicit path.
    pub fn open(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("reading flag store {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing flag store {:?}", path))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Open the store at its default location under the user data
    /// directory.
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir().context("Could not determine data directory")?;
        let dir = data_dir.join("review-desk");
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating data directory {:?}", dir))?;
        Self::open(dir.join("flags.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing flag store {:?}", self.path))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(BANNER_DISMISSED), None);
        assert!(!store.get_bool(BANNER_DISMISSED));

        store.set_bool(BANNER_DISMISSED, true).unwrap();
        assert!(store.get_bool(BANNER_DISMISSED));

        store.remove(BANNER_DISMISSED).unwrap();
        assert_eq!(store.get(BANNER_DISMISSED), None);
    }

    #[test]
    fn test_file_store_write_through_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flags.json");

        {
            let mut store = FileStore::open(path.clone()).unwrap();
            store.set(ONBOARDING_COMPLETE, "true").unwrap();
            store.set("theme", "dark").unwrap();
        }

        // a fresh open sees everything written before
        let store = FileStore::open(path).unwrap();
        assert_eq!(store.get(ONBOARDING_COMPLETE).as_deref(), Some("true"));
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(store.get_bool(ONBOARDING_COMPLETE));
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("never_written.json")).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flags.json");

        let mut store = FileStore::open(path.clone()).unwrap();
        store.set("ephemeral", "yes").unwrap();
        store.remove("ephemeral").unwrap();

        let reopened = FileStore::open(path).unwrap();
        assert_eq!(reopened.get("ephemeral"), None);
    }
}
