//! Player ship

use crate::components::Thruster;
use crate::config::ShipConfig;
use aster_engine::ecs::{Behavior, FrameContext};
use aster_engine::foundation::math::Vec2;
use aster_engine::input::{Axis, KeyCode};
use aster_engine::physics::{Collider, CollisionLayers, PhysicsBody, RigidBody2D};

/// Requests the ship makes of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipCommand {
    /// Launch a projectile from this pose
    Fire {
        /// Muzzle position
        position: Vec2,
        /// Ship orientation in radians
        rotation: f32,
    },
}

/// The player's ship.
///
/// Turns and thrusts from the input axes and fires on the fire key's press
/// edge. Touching an asteroid only raises [`Ship::wants_destroy`]; removing
/// the ship is up to the director.
#[derive(Debug, Clone)]
pub struct Ship {
    body: RigidBody2D,
    thruster: Thruster,
    destroy_me: bool,
    tuning: ShipConfig,
    fire_key: KeyCode,
}

impl Ship {
    /// A ship at rest at the origin, facing up
    pub fn new(tuning: &ShipConfig, fire_key: KeyCode) -> Self {
        Self {
            body: RigidBody2D::at(Vec2::zeros()).with_linear_drag(tuning.linear_drag),
            thruster: Thruster::default(),
            destroy_me: false,
            tuning: tuning.clone(),
            fire_key,
        }
    }

    /// Exhaust effect state
    pub const fn thruster(&self) -> Thruster {
        self.thruster
    }

    /// Set once an asteroid has hit the ship; never cleared
    pub const fn wants_destroy(&self) -> bool {
        self.destroy_me
    }

    /// Record a collision with an asteroid
    pub fn on_asteroid_contact(&mut self) {
        if !self.destroy_me {
            log::debug!("Ship hit at ({:.2}, {:.2})", self.body.position.x, self.body.position.y);
        }
        self.destroy_me = true;
    }
}

impl Behavior for Ship {
    type Command = ShipCommand;

    fn update(&mut self, ctx: &FrameContext<'_>, commands: &mut Vec<Self::Command>) {
        let turn = ctx.input.axis(Axis::Horizontal);
        if turn.abs() > f32::EPSILON {
            self.body.rotate_degrees(turn * self.tuning.turn_factor);
        }

        let thrusting = ctx.input.axis(Axis::Vertical) > 0.0;
        self.thruster.set_firing(thrusting);
        if thrusting {
            let forward = self.body.up();
            self.body.add_impulse(forward * self.tuning.thrust_factor);
        }

        if ctx.input.is_key_pressed(self.fire_key) {
            commands.push(ShipCommand::Fire {
                position: self.body.position,
                rotation: self.body.rotation,
            });
        }

        self.body.position = ctx.bounds.wrap(self.body.position);
    }
}

impl PhysicsBody for Ship {
    fn body(&self) -> &RigidBody2D {
        &self.body
    }

    fn body_mut(&mut self) -> &mut RigidBody2D {
        &mut self.body
    }

    fn collider(&self) -> Collider {
        Collider::new(self.tuning.collider_radius, CollisionLayers::PLAYER, CollisionLayers::ASTEROID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_engine::foundation::math::ScreenBounds;
    use aster_engine::input::InputManager;
    use approx::assert_relative_eq;

    fn tick(ship: &mut Ship, input: &InputManager) -> Vec<ShipCommand> {
        let bounds = ScreenBounds::default();
        let ctx = FrameContext { input, bounds: &bounds, delta_time: 1.0 / 60.0 };
        let mut commands = Vec::new();
        ship.update(&ctx, &mut commands);
        commands
    }

    #[test]
    fn test_spawns_at_origin_facing_up() {
        let ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        assert_eq!(ship.body().position, Vec2::zeros());
        assert_relative_eq!(ship.body().up(), Vec2::new(0.0, 1.0));
        assert!(!ship.wants_destroy());
    }

    #[test]
    fn test_right_turns_clockwise() {
        let mut ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Right, true);

        tick(&mut ship, &input);
        assert_relative_eq!(ship.body().rotation, (-2.0_f32).to_radians());
    }

    #[test]
    fn test_thrust_pushes_forward_and_fires_thruster() {
        let mut ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Up, true);

        tick(&mut ship, &input);
        assert_relative_eq!(ship.body().velocity, Vec2::new(0.0, 0.5));
        assert!(ship.thruster().emitter_enabled);
        assert!(ship.thruster().sound_active);

        input.handle_key_input(KeyCode::Up, false);
        tick(&mut ship, &input);
        assert!(!ship.thruster().is_firing());
    }

    #[test]
    fn test_reverse_does_not_thrust() {
        let mut ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Down, true);

        tick(&mut ship, &input);
        assert_eq!(ship.body().velocity, Vec2::zeros());
        assert!(!ship.thruster().is_firing());
    }

    #[test]
    fn test_fire_only_on_press_edge() {
        let mut ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);

        let commands = tick(&mut ship, &input);
        assert_eq!(
            commands,
            vec![ShipCommand::Fire { position: Vec2::zeros(), rotation: 0.0 }]
        );

        input.update();
        assert!(tick(&mut ship, &input).is_empty());
    }

    #[test]
    fn test_asteroid_contact_latches() {
        let mut ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        ship.on_asteroid_contact();
        tick(&mut ship, &InputManager::new());
        assert!(ship.wants_destroy());
    }

    #[test]
    fn test_wraps_off_screen() {
        let mut ship = Ship::new(&ShipConfig::default(), KeyCode::Space);
        ship.body_mut().position = Vec2::new(9.5, 0.0);
        tick(&mut ship, &InputManager::new());
        assert_relative_eq!(ship.body().position.x, -8.9);
    }
}
