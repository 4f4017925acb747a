//! Trigger colliders and bounding circles

use super::CollisionLayers;
use crate::foundation::math::Vec2;

/// A bounding circle for overlap detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle in world space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle intersects with another (touching counts)
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }
}

/// Circular trigger collider attached to a rigid body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Radius in world units (already scaled)
    pub radius: f32,
    /// Layers this collider belongs to
    pub layer: CollisionLayers,
    /// Layers this collider reacts to
    pub mask: CollisionLayers,
}

impl Collider {
    /// Create a collider
    pub fn new(radius: f32, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        Self { radius, layer, mask }
    }

    /// Same collider with its radius multiplied by `scale`
    pub fn scaled(self, scale: f32) -> Self {
        Self {
            radius: self.radius * scale,
            ..self
        }
    }

    /// Whether this collider reacts to `other`
    pub fn accepts(&self, other: &Self) -> bool {
        self.mask.intersects(other.layer)
    }

    /// World-space circle for a body at `position`
    pub fn bounds_at(&self, position: Vec2) -> BoundingCircle {
        BoundingCircle::new(position, self.radius)
    }
}
