//! Asteroids
//!
//! An asteroid is launched from a random screen edge with a random push and
//! spin, drifts and wraps around the screen, and reports its destruction only
//! when a projectile caused it.

use crate::components::AsteroidSize;
use crate::config::AsteroidConfig;
use aster_engine::ecs::{Behavior, FrameContext};
use aster_engine::foundation::math::{direction_from_angle, ScreenBounds, Vec2};
use aster_engine::physics::{Collider, CollisionLayers, PhysicsBody, RigidBody2D};
use rand::Rng;
use std::convert::Infallible;
use std::f32::consts::TAU;

/// Notification that a projectile destroyed an asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidDestroyed {
    /// Size the asteroid had when it was destroyed
    pub size: AsteroidSize,
    /// Last known position
    pub position: Vec2,
}

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    /// Minimum X
    Left,
    /// Maximum X
    Right,
    /// Maximum Y
    Top,
    /// Minimum Y
    Bottom,
}

impl SpawnEdge {
    const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Pick an edge uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Uniformly random point along this edge
    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R, bounds: &ScreenBounds) -> Vec2 {
        match self {
            Self::Left => Vec2::new(bounds.left, rng.gen_range(bounds.bottom..=bounds.top)),
            Self::Right => Vec2::new(bounds.right, rng.gen_range(bounds.bottom..=bounds.top)),
            Self::Top => Vec2::new(rng.gen_range(bounds.left..=bounds.right), bounds.top),
            Self::Bottom => Vec2::new(rng.gen_range(bounds.left..=bounds.right), bounds.bottom),
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    size: AsteroidSize,
    body: RigidBody2D,
    variant: usize,
    base_radius: f32,
    destroyed_by_projectile: bool,
}

impl Asteroid {
    /// Create an asteroid of random size on a random screen edge, already
    /// moving and spinning. `variants` is the number of asteroid prefabs to
    /// pick the look from.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: &ScreenBounds,
        tuning: &AsteroidConfig,
        variants: usize,
    ) -> Self {
        let size = AsteroidSize::from_roll(rng.gen_range(0.0..=1.0));
        let position = SpawnEdge::random(rng).random_point(rng, bounds);

        let mut body = RigidBody2D::at(position);
        let direction = direction_from_angle(rng.gen_range(0.0..TAU));
        body.add_impulse(direction * rng.gen_range(tuning.min_impulse..=tuning.max_impulse));
        body.add_angular_impulse(rng.gen_range(tuning.min_torque..=tuning.max_torque));

        Self {
            size,
            body,
            variant: rng.gen_range(0..variants.max(1)),
            base_radius: tuning.base_radius,
            destroyed_by_projectile: false,
        }
    }

    /// Current size
    pub const fn size(&self) -> AsteroidSize {
        self.size
    }

    /// Set the size; scale and collider follow it
    pub fn change_size(&mut self, size: AsteroidSize) {
        self.size = size;
    }

    /// Visual scale relative to the prefab
    pub const fn scale(&self) -> f32 {
        self.size.scale_factor()
    }

    /// Index into the asteroid prefab list
    pub const fn variant(&self) -> usize {
        self.variant
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Teleport without touching velocity
    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    /// Flag that a projectile is about to destroy this asteroid.
    ///
    /// Must be called before [`Asteroid::destroy`]; repeated calls have no
    /// further effect.
    pub fn mark_destroyed_by_projectile(&mut self) {
        self.destroyed_by_projectile = true;
    }

    /// Whether a projectile has flagged this asteroid
    pub const fn is_destroyed_by_projectile(&self) -> bool {
        self.destroyed_by_projectile
    }

    /// Tear down a removed asteroid. Returns the destruction notice only if a
    /// projectile destroyed it.
    pub fn destroy(self) -> Option<AsteroidDestroyed> {
        self.destroyed_by_projectile.then(|| AsteroidDestroyed {
            size: self.size,
            position: self.body.position,
        })
    }
}

impl Behavior for Asteroid {
    type Command = Infallible;

    fn update(&mut self, ctx: &FrameContext<'_>, _commands: &mut Vec<Self::Command>) {
        self.body.position = ctx.bounds.wrap(self.body.position);
    }
}

impl PhysicsBody for Asteroid {
    fn body(&self) -> &RigidBody2D {
        &self.body
    }

    fn body_mut(&mut self) -> &mut RigidBody2D {
        &mut self.body
    }

    fn collider(&self) -> Collider {
        Collider::new(
            self.base_radius,
            CollisionLayers::ASTEROID,
            CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
        )
        .scaled(self.scale())
    }
}
