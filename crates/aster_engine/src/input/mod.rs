//! Input management system
//!
//! Tracks which keys are held plus the keys that went down during the
//! current frame, and derives virtual axes from key pairs.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Input manager
#[derive(Debug, Clone)]
pub struct InputManager {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
    axes: HashMap<Axis, AxisBinding>,
}

impl InputManager {
    /// Create an input manager with the default axis bindings
    pub fn new() -> Self {
        let axes = HashMap::from([
            (Axis::Horizontal, AxisBinding::new(vec![KeyCode::Right, KeyCode::D], vec![KeyCode::Left, KeyCode::A])),
            (Axis::Vertical, AxisBinding::new(vec![KeyCode::Up, KeyCode::W], vec![KeyCode::Down, KeyCode::S])),
        ]);

        Self {
            held: HashSet::new(),
            pressed_this_frame: HashSet::new(),
            axes,
        }
    }

    /// End the frame: forget this frame's press edges
    pub fn update(&mut self) {
        self.pressed_this_frame.clear();
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            // Key repeat does not produce a new edge
            if self.held.insert(key) {
                self.pressed_this_frame.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Replace the keys driving an axis
    pub fn bind_axis(&mut self, axis: Axis, binding: AxisBinding) {
        self.axes.insert(axis, binding);
    }

    /// Whether the key is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether the key went down this frame
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// Current axis value in `[-1, 1]`
    pub fn axis(&self, axis: Axis) -> f32 {
        self.axes
            .get(&axis)
            .map_or(0.0, |binding| binding.value(&self.held))
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Virtual input axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left (-1) to right (+1)
    Horizontal,
    /// Down (-1) to up (+1)
    Vertical,
}

/// Keys that push an axis towards +1 and -1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBinding {
    /// Keys contributing +1
    pub positive: Vec<KeyCode>,
    /// Keys contributing -1
    pub negative: Vec<KeyCode>,
}

impl AxisBinding {
    /// Create a binding from positive and negative key lists
    pub fn new(positive: Vec<KeyCode>, negative: Vec<KeyCode>) -> Self {
        Self { positive, negative }
    }

    fn value(&self, held: &HashSet<KeyCode>) -> f32 {
        let positive = self.positive.iter().any(|key| held.contains(key));
        let negative = self.negative.iter().any(|key| held.contains(key));
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
