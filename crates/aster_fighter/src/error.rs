//! Game errors

use aster_engine::{config::ConfigError, storage::PreferencesError, AppError};
use thiserror::Error;

/// Game-level errors
#[derive(Error, Debug)]
pub enum GameError {
    /// A prefab the game needs is not in the catalogue
    #[error("Missing {kind} prefab")]
    MissingPrefab {
        /// Which prefab slot is empty
        kind: &'static str,
    },

    /// A tunable is out of range
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Preference store failure
    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferencesError),
}

impl From<GameError> for AppError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::MissingPrefab { .. } => Self::Asset(error.to_string()),
            GameError::InvalidTuning(_) | GameError::Config(_) => Self::Config(error.to_string()),
            GameError::Preferences(_) => Self::Custom(error.to_string()),
        }
    }
}
