//! Entity storage and per-frame behaviours
//!
//! Entities live in typed [`EntityPool`] arenas owned by the game. Instead of
//! engine callbacks, each pool drives its entities through the [`Behavior`]
//! trait once per tick and hands back whatever commands they emitted.

pub mod entity;
pub mod pool;
pub mod behavior;

pub use entity::Entity;
pub use pool::EntityPool;
pub use behavior::{Behavior, FrameContext};
