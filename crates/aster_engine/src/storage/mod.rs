//! Persistent key-value storage

pub mod preferences;

pub use preferences::{Preferences, MemoryPreferences, FilePreferences, PreferencesError};
