//! Ship projectiles

use crate::config::ProjectileConfig;
use aster_engine::ecs::{Behavior, FrameContext};
use aster_engine::foundation::math::Vec2;
use aster_engine::physics::{Collider, CollisionLayers, PhysicsBody, RigidBody2D};

/// Requests a projectile makes of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileCommand {
    /// Left the screen; remove without further effect
    OutOfBounds,
}

/// A projectile flying in a straight line
#[derive(Debug, Clone)]
pub struct Projectile {
    body: RigidBody2D,
    radius: f32,
}

impl Projectile {
    /// Launch from `position` along the local up axis of `rotation`
    pub fn fire(position: Vec2, rotation: f32, tuning: &ProjectileConfig) -> Self {
        let mut body = RigidBody2D::at(position);
        body.rotation = rotation;
        let forward = body.up();
        body.add_impulse(forward * tuning.impulse);

        Self {
            body,
            radius: tuning.collider_radius,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.body.position
    }
}

impl Behavior for Projectile {
    type Command = ProjectileCommand;

    fn update(&mut self, ctx: &FrameContext<'_>, commands: &mut Vec<Self::Command>) {
        if !ctx.bounds.contains(self.body.position) {
            commands.push(ProjectileCommand::OutOfBounds);
        }
    }
}

impl PhysicsBody for Projectile {
    fn body(&self) -> &RigidBody2D {
        &self.body
    }

    fn body_mut(&mut self) -> &mut RigidBody2D {
        &mut self.body
    }

    fn collider(&self) -> Collider {
        Collider::new(self.radius, CollisionLayers::PROJECTILE, CollisionLayers::ASTEROID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_engine::foundation::math::ScreenBounds;
    use aster_engine::input::InputManager;
    use approx::assert_relative_eq;

    fn tick(projectile: &mut Projectile) -> Vec<ProjectileCommand> {
        let input = InputManager::new();
        let bounds = ScreenBounds::default();
        let ctx = FrameContext { input: &input, bounds: &bounds, delta_time: 1.0 / 60.0 };
        let mut commands = Vec::new();
        projectile.update(&ctx, &mut commands);
        commands
    }

    #[test]
    fn test_fired_along_ship_heading() {
        let projectile = Projectile::fire(Vec2::zeros(), std::f32::consts::FRAC_PI_2, &ProjectileConfig::default());
        // A quarter turn counter-clockwise points up the -X axis
        assert_relative_eq!(projectile.body().velocity, Vec2::new(-50.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_inside_screen_stays() {
        let mut projectile = Projectile::fire(Vec2::new(8.9, 5.0), 0.0, &ProjectileConfig::default());
        assert!(tick(&mut projectile).is_empty());
    }

    #[test]
    fn test_leaving_screen_requests_removal() {
        let mut projectile = Projectile::fire(Vec2::new(0.0, 5.01), 0.0, &ProjectileConfig::default());
        assert_eq!(tick(&mut projectile), vec![ProjectileCommand::OutOfBounds]);

        let mut projectile = Projectile::fire(Vec2::new(-9.0, 0.0), 0.0, &ProjectileConfig::default());
        assert_eq!(tick(&mut projectile), vec![ProjectileCommand::OutOfBounds]);
    }
}
