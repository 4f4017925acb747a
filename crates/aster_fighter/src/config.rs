//! Game configuration
//!
//! Every section falls back to its defaults, so a config file only needs the
//! values it changes.

use crate::error::GameError;
use aster_engine::config::Config;
use aster_engine::input::{AxisBinding, KeyCode};
use aster_engine::storage::FilePreferences;
use aster_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Most lives a game can start with
pub const MAX_LIVES: u32 = 3;

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings (log level, screen bounds, time step)
    pub engine: EngineConfig,

    /// Director timing and limits
    pub gameplay: GameplayConfig,

    /// Ship handling
    pub ship: ShipConfig,

    /// Projectile settings
    pub projectile: ProjectileConfig,

    /// Asteroid spawn motion
    pub asteroid: AsteroidConfig,

    /// Key bindings
    pub controls: ControlsConfig,

    /// Visual templates for each entity kind
    pub prefabs: PrefabCatalog,

    /// Headless session settings for the binary
    pub session: SessionConfig,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path`, or from `fallback` when no path is given; a missing
    /// fallback file yields the defaults
    pub fn load(path: Option<&Path>, fallback: &Path) -> Result<Self, GameError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_or_default(fallback)?,
        };
        Ok(config)
    }

    /// Check that every tunable is usable
    pub fn validate(&self) -> Result<(), GameError> {
        let gameplay = &self.gameplay;
        if !(1..=MAX_LIVES).contains(&gameplay.starting_lives) {
            return Err(GameError::InvalidTuning(format!(
                "starting_lives must be in [1, {MAX_LIVES}], got {}",
                gameplay.starting_lives
            )));
        }
        positive("start_delay", gameplay.start_delay)?;
        positive("initial_spawn_delay", gameplay.initial_spawn_delay)?;
        positive("spawn_interval_min", gameplay.spawn_interval_min)?;
        ordered("spawn_interval", gameplay.spawn_interval_min, gameplay.spawn_interval_max)?;
        if !gameplay.respawn_delay.is_finite() || gameplay.respawn_delay < 0.0 {
            return Err(GameError::InvalidTuning(format!(
                "respawn_delay must be finite and not negative, got {}",
                gameplay.respawn_delay
            )));
        }

        finite("ship.thrust_factor", self.ship.thrust_factor)?;
        finite("ship.turn_factor", self.ship.turn_factor)?;
        finite("ship.linear_drag", self.ship.linear_drag)?;
        finite("projectile.impulse", self.projectile.impulse)?;

        positive("ship.collider_radius", self.ship.collider_radius)?;
        positive("projectile.collider_radius", self.projectile.collider_radius)?;
        positive("asteroid.base_radius", self.asteroid.base_radius)?;
        ordered("asteroid.impulse", self.asteroid.min_impulse, self.asteroid.max_impulse)?;
        ordered("asteroid.torque", self.asteroid.min_torque, self.asteroid.max_torque)?;

        Ok(())
    }
}

fn finite(name: &str, value: f32) -> Result<(), GameError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidTuning(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f32) -> Result<(), GameError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidTuning(format!("{name} must be positive, got {value}")))
    }
}

fn ordered(name: &str, min: f32, max: f32) -> Result<(), GameError> {
    finite(name, min)?;
    finite(name, max)?;
    if min <= max {
        Ok(())
    } else {
        Err(GameError::InvalidTuning(format!("{name} range is inverted: [{min}, {max}]")))
    }
}

/// Director timing and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Lives at the start of a game
    pub starting_lives: u32,

    /// Pause between the start key and the ship appearing (seconds)
    pub start_delay: f32,

    /// Wait before the first asteroid of a game (seconds)
    pub initial_spawn_delay: f32,

    /// Shortest wait between asteroid spawns (seconds)
    pub spawn_interval_min: f32,

    /// Longest wait between asteroid spawns (seconds)
    pub spawn_interval_max: f32,

    /// Time the ship stays gone after blowing up (seconds)
    pub respawn_delay: f32,

    /// Live asteroids above which the spawn timer adds no more
    pub max_asteroids: usize,

    /// Preference key the high score is stored under
    pub high_score_key: String,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            start_delay: 1.0,
            initial_spawn_delay: 5.0,
            spawn_interval_min: 1.0,
            spawn_interval_max: 5.0,
            respawn_delay: 5.0,
            max_asteroids: 5,
            high_score_key: "HighScore".to_string(),
        }
    }
}

/// Ship handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Forward impulse applied every frame thrust is held
    pub thrust_factor: f32,

    /// Degrees turned per frame at full axis deflection
    pub turn_factor: f32,

    /// Linear drag on the ship's body
    pub linear_drag: f32,

    /// Trigger radius
    pub collider_radius: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            thrust_factor: 0.5,
            turn_factor: -2.0,
            linear_drag: 1.0,
            collider_radius: 0.5,
        }
    }
}

/// Projectile settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Forward impulse given at launch
    pub impulse: f32,

    /// Trigger radius
    pub collider_radius: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            impulse: 50.0,
            collider_radius: 0.1,
        }
    }
}

/// Asteroid spawn motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Smallest launch impulse
    pub min_impulse: f32,

    /// Largest launch impulse
    pub max_impulse: f32,

    /// Smallest launch spin
    pub min_torque: f32,

    /// Largest launch spin
    pub max_torque: f32,

    /// Trigger radius of a small asteroid; larger sizes scale it
    pub base_radius: f32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            min_impulse: 1.0,
            max_impulse: 5.0,
            min_torque: -1.0,
            max_torque: 1.0,
            base_radius: 0.5,
        }
    }
}

/// Key bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Fires a projectile while playing
    pub fire: KeyCode,

    /// Starts a game from the menu or game-over screen
    pub start: KeyCode,

    /// Clears the stored high score from the menu or game-over screen
    pub reset_high_score: KeyCode,

    /// Turn axis
    pub horizontal: AxisBinding,

    /// Thrust axis
    pub vertical: AxisBinding,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            fire: KeyCode::Space,
            start: KeyCode::Space,
            reset_high_score: KeyCode::Backspace,
            horizontal: AxisBinding::new(vec![KeyCode::Right, KeyCode::D], vec![KeyCode::Left, KeyCode::A]),
            vertical: AxisBinding::new(vec![KeyCode::Up, KeyCode::W], vec![KeyCode::Down, KeyCode::S]),
        }
    }
}

/// Visual templates the presentation layer instantiates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefabCatalog {
    /// Player ship
    pub ship: String,

    /// Projectile
    pub projectile: String,

    /// Asteroid variants, one picked at random per asteroid
    pub asteroids: Vec<String>,
}

impl Default for PrefabCatalog {
    fn default() -> Self {
        Self {
            ship: "ship".to_string(),
            projectile: "laser".to_string(),
            asteroids: vec![
                "asteroid_a".to_string(),
                "asteroid_b".to_string(),
                "asteroid_c".to_string(),
            ],
        }
    }
}

impl PrefabCatalog {
    /// Every slot must be filled before the director can run
    pub fn validate(&self) -> Result<(), GameError> {
        if self.ship.trim().is_empty() {
            return Err(GameError::MissingPrefab { kind: "ship" });
        }
        if self.projectile.trim().is_empty() {
            return Err(GameError::MissingPrefab { kind: "projectile" });
        }
        if self.asteroids.is_empty() || self.asteroids.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::MissingPrefab { kind: "asteroid" });
        }
        Ok(())
    }
}

/// Headless session settings for the binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File holding the persisted high score
    pub preferences_path: String,

    /// Simulated seconds the scripted pilot plays for
    pub duration: f32,

    /// Fixed RNG seed; unset draws one from the OS
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Open the high-score store at `preferences_path`
    pub fn open_preferences(&self) -> Result<FilePreferences, GameError> {
        Ok(FilePreferences::open(&self.preferences_path)?)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preferences_path: "aster_fighter_prefs.toml".to_string(),
            duration: 120.0,
            seed: None,
        }
    }
}
