use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::capabilities::PreferenceStore;
use crate::app::domain::settings::config_dir;
use crate::app::infrastructure::error::Result;

/// Preferences persisted as a flat JSON object of strings, rewritten on every change.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl JsonPreferenceStore {
    /// Open the store at the default per-user location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store at `path`. A missing file starts empty; an unreadable one
    /// is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), "Failed to parse preferences: {e}. Starting empty.");
                BTreeMap::new()
            }),
            Err(_) => {
                debug!(path = %path.display(), "No preferences file yet");
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: RefCell::new(values),
        }
    }

    pub fn default_path() -> PathBuf {
        config_dir().join("preferences.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&*self.values.borrow())?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> Result<()> {
        let removed = self.values.borrow_mut().remove(key);
        if removed.is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// In-memory store for sessions that should not touch the disk.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
