//! Platform backends
//!
//! A backend feeds the engine one [`Frame`] at a time: the time step and the
//! platform events that arrived during it.

pub mod headless;

pub use headless::{Frame, FrameSource, ScriptedFrames};
