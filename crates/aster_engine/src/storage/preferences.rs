//! Integer preference store
//!
//! A tiny player-preferences service: named integers that survive between
//! runs. Reading a missing key is not an error; callers pick their own
//! default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Named integer values persisted between sessions
pub trait Preferences {
    /// Read a value, `None` if the key is absent
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Store a value, replacing any previous one
    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError>;

    /// Remove a key; removing an absent key succeeds
    fn delete_key(&mut self, key: &str) -> Result<(), PreferencesError>;
}

/// Preference store errors
#[derive(thiserror::Error, Debug)]
pub enum PreferencesError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Failed to parse preferences file {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Volatile preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, i64>,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value
    pub fn with_int(mut self, key: &str, value: i64) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }
}

impl Preferences for MemoryPreferences {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete_key(&mut self, key: &str) -> Result<(), PreferencesError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Preference store backed by a TOML table on disk.
///
/// Every mutation is written through to the file immediately.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl FilePreferences {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref().to_path_buf();

        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| PreferencesError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No preferences at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, values })
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferencesError> {
        let contents = toml::to_string(&self.values)
            .map_err(|e| PreferencesError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn delete_key(&mut self, key: &str) -> Result<(), PreferencesError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
