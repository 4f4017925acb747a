//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and screen-space helpers
//! - Time management (frame clock, stopwatch, countdown timer)
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
