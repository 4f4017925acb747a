//! Math utilities and types
//!
//! Provides the 2D math types used by the game layer plus the screen-space
//! rectangle every entity is bounded by.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Rotation2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Unit vector pointing along `angle` (radians, counter-clockwise from +X).
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Local "up" (+Y) axis of an object rotated by `rotation` radians.
///
/// A rotation of zero points straight up the screen.
pub fn up_vector(rotation: f32) -> Vec2 {
    Rotation2::new(rotation) * Vec2::y()
}

/// Visible play-field rectangle in world units.
///
/// Computed once at startup from the camera/viewport and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    /// Left edge (minimum X)
    pub left: f32,
    /// Right edge (maximum X)
    pub right: f32,
    /// Bottom edge (minimum Y)
    pub bottom: f32,
    /// Top edge (maximum Y)
    pub top: f32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        // Orthographic camera of half-height 5 at 16:9
        Self {
            left: -8.9,
            right: 8.9,
            bottom: -5.0,
            top: 5.0,
        }
    }
}

impl ScreenBounds {
    /// Create bounds from the four edges
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Width of the play field
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the play field
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Whether the edges describe a non-empty rectangle
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether a point lies inside the bounds (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }

    /// Teleport a point that left the screen to the opposite edge.
    ///
    /// Each axis is handled independently; a point exactly on an edge stays put.
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        let mut wrapped = point;

        if wrapped.x > self.right {
            wrapped.x = self.left;
        } else if wrapped.x < self.left {
            wrapped.x = self.right;
        }

        if wrapped.y < self.bottom {
            wrapped.y = self.top;
        } else if wrapped.y > self.top {
            wrapped.y = self.bottom;
        }

        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_up_vector_follows_rotation() {
        assert_relative_eq!(up_vector(0.0), Vec2::new(0.0, 1.0), epsilon = EPSILON);
        // Quarter turn counter-clockwise points left
        assert_relative_eq!(up_vector(FRAC_PI_2), Vec2::new(-1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_direction_from_angle() {
        assert_relative_eq!(direction_from_angle(0.0), Vec2::new(1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(direction_from_angle(FRAC_PI_2), Vec2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_contains_includes_edges() {
        let bounds = ScreenBounds::new(-2.0, 2.0, -1.0, 1.0);
        assert!(bounds.contains(Vec2::new(2.0, 1.0)));
        assert!(bounds.contains(Vec2::zeros()));
        assert!(!bounds.contains(Vec2::new(2.01, 0.0)));
        assert!(!bounds.contains(Vec2::new(0.0, -1.5)));
    }

    #[test]
    fn test_wrap_moves_to_opposite_edge() {
        let bounds = ScreenBounds::new(-2.0, 2.0, -1.0, 1.0);
        assert_eq!(bounds.wrap(Vec2::new(2.5, 0.3)), Vec2::new(-2.0, 0.3));
        assert_eq!(bounds.wrap(Vec2::new(-2.5, 0.3)), Vec2::new(2.0, 0.3));
        assert_eq!(bounds.wrap(Vec2::new(0.0, -1.2)), Vec2::new(0.0, 1.0));
        assert_eq!(bounds.wrap(Vec2::new(3.0, 4.0)), Vec2::new(-2.0, -1.0));
        // On the edge is still on screen
        assert_eq!(bounds.wrap(Vec2::new(2.0, 1.0)), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_degenerate_bounds_are_invalid() {
        assert!(ScreenBounds::default().is_valid());
        assert!(!ScreenBounds::new(1.0, 1.0, -1.0, 1.0).is_valid());
    }
}
