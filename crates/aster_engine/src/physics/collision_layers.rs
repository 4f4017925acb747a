//! Collision layer system for filtering overlap detection
//!
//! Every collider sits on one or more layers and carries a mask of the layers
//! it reacts to. A pair is only tested when the first collider's mask
//! includes the second's layer.

bitflags::bitflags! {
    /// Collision layer bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player ship layer
        const PLAYER = 1 << 0;
        /// Asteroid layer
        const ASTEROID = 1 << 1;
        /// Projectiles (bullets, lasers)
        const PROJECTILE = 1 << 2;
    }
}

impl CollisionLayers {
    /// No collision layer
    pub const NONE: Self = Self::empty();

    /// All collision layers
    pub const ALL: Self = Self::all();
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_bits_are_distinct() {
        assert!(!CollisionLayers::PLAYER.intersects(CollisionLayers::ASTEROID));
        assert!(!CollisionLayers::ASTEROID.intersects(CollisionLayers::PROJECTILE));
        assert!(CollisionLayers::ALL.contains(CollisionLayers::PLAYER | CollisionLayers::PROJECTILE));
        assert!(CollisionLayers::NONE.is_empty());
    }
}
