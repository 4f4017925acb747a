//! Per-frame entity behaviour

use crate::foundation::math::ScreenBounds;
use crate::input::InputManager;

/// Read-only view of the engine services a behaviour may consult during a tick
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    /// Input state for this frame
    pub input: &'a InputManager,
    /// Visible play-field bounds
    pub bounds: &'a ScreenBounds,
    /// Time since the last frame in seconds
    pub delta_time: f32,
}

/// Behaviour run once per tick for every live entity.
///
/// Behaviours never reach into other entities; anything that affects the
/// wider world is pushed as a `Command` and applied by the owner after the
/// update pass.
pub trait Behavior {
    /// Requests this behaviour can make of its owner
    type Command;

    /// Advance the entity by one frame
    fn update(&mut self, ctx: &FrameContext<'_>, commands: &mut Vec<Self::Command>);
}
