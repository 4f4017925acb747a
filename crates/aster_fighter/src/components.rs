//! Game-specific components

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Small asteroid (destroyed completely)
    Small,

    /// Medium asteroid (splits into small)
    Medium,

    /// Large asteroid (splits into medium)
    Large,
}

impl AsteroidSize {
    /// Upper bound (exclusive) of the roll that produces a small asteroid
    pub const SMALL_ROLL: f32 = 0.3;

    /// Upper bound (exclusive) of the roll that produces a medium asteroid
    pub const MEDIUM_ROLL: f32 = 0.6;

    /// Map a uniform roll in `[0, 1]` to a size
    pub fn from_roll(roll: f32) -> Self {
        if roll < Self::SMALL_ROLL {
            Self::Small
        } else if roll < Self::MEDIUM_ROLL {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Get the scale factor for this size
    pub const fn scale_factor(self) -> f32 {
        match self {
            Self::Small => 1.0,
            Self::Medium => 2.0,
            Self::Large => 3.0,
        }
    }

    /// Get the next smaller size when split
    pub const fn split_into(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }
}

/// Engine exhaust effect state, read by the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thruster {
    /// Particle emitter is emitting
    pub emitter_enabled: bool,

    /// Looped thruster sound is playing
    pub sound_active: bool,
}

impl Thruster {
    /// Switch the emitter and sound together
    pub fn set_firing(&mut self, firing: bool) {
        self.emitter_enabled = firing;
        self.sound_active = firing;
    }

    /// Whether the thruster is firing
    pub const fn is_firing(&self) -> bool {
        self.emitter_enabled
    }
}
