//! # Aster Engine
//!
//! A small headless game engine: the host services a 2D arcade game needs,
//! without a window, GPU or audio device.
//!
//! ## Features
//!
//! - **Frame Loop**: `Engine::run` drives an [`Application`] from any [`backend::FrameSource`]
//! - **Entities**: Generational arenas with per-entity [`ecs::Behavior`] updates
//! - **Physics**: Impulse-driven 2D rigid bodies and circle overlap queries
//! - **Input**: Key state with per-frame edges and virtual axes
//! - **Persistence**: Integer preference store (memory or TOML file)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aster_engine::prelude::*;
//! use aster_engine::backend::ScriptedFrames;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         // Initialize your game
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Update game logic
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {
//!         // Cleanup resources
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app, ScriptedFrames::idle(1.0 / 60.0, 600))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod events;
pub mod input;
pub mod physics;
pub mod storage;
pub mod config;
pub mod ui;
pub mod backend;

mod application;
mod engine;

pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineConfig, EngineError,
        foundation::{
            math::{Vec2, ScreenBounds},
            time::{Timer, Stopwatch},
        },
        ecs::{Entity, EntityPool, Behavior, FrameContext},
        events::EventQueue,
        input::{InputManager, KeyCode, Axis},
        physics::{RigidBody2D, Collider, CollisionLayers, PhysicsBody},
        storage::{Preferences, MemoryPreferences, FilePreferences},
        config::{Config, ConfigError},
        ui::TextBanner,
    };
}
