//! Game entities
//!
//! Each entity owns its rigid body and implements [`aster_engine::ecs::Behavior`]
//! for its per-frame logic. Anything that reaches beyond the entity itself is
//! returned to the scene as a command.

pub mod asteroid;
pub mod projectile;
pub mod ship;

pub use asteroid::{Asteroid, AsteroidDestroyed, SpawnEdge};
pub use projectile::{Projectile, ProjectileCommand};
pub use ship::{Ship, ShipCommand};
