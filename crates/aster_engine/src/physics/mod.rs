//! 2D physics
//!
//! Impulse-driven rigid bodies integrated once per frame, and circle overlap
//! queries used as trigger volumes. There is no collision response: bodies
//! pass through each other and overlaps are only reported.

pub mod body;
pub mod collision;
pub mod collision_layers;

pub use body::RigidBody2D;
pub use collision::{BoundingCircle, Collider};
pub use collision_layers::CollisionLayers;

use crate::ecs::{Entity, EntityPool};

/// An entity with a rigid body and a trigger collider
pub trait PhysicsBody {
    /// The entity's rigid body
    fn body(&self) -> &RigidBody2D;

    /// Mutable access to the entity's rigid body
    fn body_mut(&mut self) -> &mut RigidBody2D;

    /// The entity's trigger collider
    fn collider(&self) -> Collider;

    /// World-space bounding circle of the collider
    fn bounds(&self) -> BoundingCircle {
        self.collider().bounds_at(self.body().position)
    }
}

/// Integrate every body in the pool
pub fn integrate_pool<T: PhysicsBody>(pool: &mut EntityPool<T>, delta_time: f32) {
    for (_, entity) in pool.iter_mut() {
        entity.body_mut().integrate(delta_time);
    }
}

/// Whether two bodies' colliders accept each other and overlap
pub fn overlaps<A: PhysicsBody + ?Sized, B: PhysicsBody + ?Sized>(a: &A, b: &B) -> bool {
    a.collider().accepts(&b.collider()) && a.bounds().intersects(&b.bounds())
}

/// Entities in `pool` overlapping `body`, in pool iteration order
pub fn overlapping<A, B>(body: &A, pool: &EntityPool<B>) -> Vec<Entity>
where
    A: PhysicsBody + ?Sized,
    B: PhysicsBody,
{
    pool.iter()
        .filter(|(_, other)| overlaps(body, *other))
        .map(|(handle, _)| handle)
        .collect()
}
