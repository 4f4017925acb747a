//! # Aster Fighter
//!
//! An Asteroids-style arcade shooter on top of `aster_engine`.
//!
//! The [`director::Director`] is the [`aster_engine::Application`]: it runs the
//! menu / playing / game-over state machine, spawns asteroids on a timer and
//! splits them when a projectile destroys one. Live entities are owned by the
//! [`scene::Scene`].

pub mod components;
pub mod config;
pub mod director;
pub mod entities;
pub mod error;
pub mod pilot;
pub mod scene;
pub mod score;

#[cfg(test)]
mod tests;

pub use config::GameConfig;
pub use director::{Director, GameMode};
pub use error::GameError;
