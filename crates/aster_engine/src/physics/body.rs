//! Rigid body for 2D movement

use crate::foundation::math::{up_vector, Vec2};

/// Impulse-driven rigid body in the XY plane.
///
/// Rotation is in radians, counter-clockwise; a rotation of zero faces +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody2D {
    /// World-space position
    pub position: Vec2,

    /// Orientation in radians
    pub rotation: f32,

    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Angular velocity in radians per second
    pub angular_velocity: f32,

    /// Mass (divides linear impulses)
    pub mass: f32,

    /// Rotational inertia (divides angular impulses)
    pub inertia: f32,

    /// Linear drag coefficient (0 = none)
    pub linear_drag: f32,

    /// Angular drag coefficient (0 = none)
    pub angular_drag: f32,
}

impl Default for RigidBody2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            mass: 1.0,
            inertia: 1.0,
            linear_drag: 0.0,
            angular_drag: 0.0,
        }
    }
}

impl RigidBody2D {
    /// Create a body at rest at `position`
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the linear drag coefficient
    pub fn with_linear_drag(mut self, drag: f32) -> Self {
        self.linear_drag = drag.max(0.0);
        self
    }

    /// Apply an instantaneous change of momentum
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }

    /// Apply an instantaneous change of angular momentum
    pub fn add_angular_impulse(&mut self, torque: f32) {
        self.angular_velocity += torque / self.inertia;
    }

    /// Rotate the body in place by `degrees` (positive is counter-clockwise)
    pub fn rotate_degrees(&mut self, degrees: f32) {
        self.rotation += degrees.to_radians();
    }

    /// The body's local up axis in world space
    pub fn up(&self) -> Vec2 {
        up_vector(self.rotation)
    }

    /// Advance the body by one step
    pub fn integrate(&mut self, delta_time: f32) {
        if self.linear_drag > 0.0 {
            self.velocity /= 1.0 + self.linear_drag * delta_time;
        }
        if self.angular_drag > 0.0 {
            self.angular_velocity /= 1.0 + self.angular_drag * delta_time;
        }

        self.position += self.velocity * delta_time;
        self.rotation += self.angular_velocity * delta_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_impulse_scales_with_mass() {
        let mut body = RigidBody2D::default();
        body.mass = 2.0;
        body.add_impulse(Vec2::new(4.0, 0.0));
        assert_relative_eq!(body.velocity, Vec2::new(2.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_integrate_without_drag() {
        let mut body = RigidBody2D::at(Vec2::new(1.0, 1.0));
        body.add_impulse(Vec2::new(0.0, 3.0));
        body.add_angular_impulse(0.5);
        body.integrate(2.0);

        assert_relative_eq!(body.position, Vec2::new(1.0, 7.0), epsilon = EPSILON);
        assert_relative_eq!(body.rotation, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_slows_body() {
        let mut body = RigidBody2D::default().with_linear_drag(1.0);
        body.add_impulse(Vec2::new(2.0, 0.0));
        body.integrate(1.0);
        assert_relative_eq!(body.velocity, Vec2::new(1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(body.position, Vec2::new(1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_turns_up_axis() {
        let mut body = RigidBody2D::default();
        assert_relative_eq!(body.up(), Vec2::new(0.0, 1.0), epsilon = EPSILON);
        body.rotate_degrees(-90.0);
        assert_relative_eq!(body.up(), Vec2::new(1.0, 0.0), epsilon = EPSILON);
    }
}
