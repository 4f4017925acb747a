//! Scripted pilot
//!
//! A [`FrameSource`] that plays the game headlessly: fixed time steps with
//! random steering, thrust and fire taps.

use aster_engine::backend::{Frame, FrameSource};
use aster_engine::input::KeyCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chance per frame that a steering key flips between held and released
const STEER_TOGGLE_CHANCE: f64 = 0.05;

/// Chance per frame of tapping the fire/start key
const FIRE_CHANCE: f64 = 0.08;

const STEERING: [KeyCode; 3] = [KeyCode::Left, KeyCode::Right, KeyCode::Up];

/// Random key presses at a fixed frame rate for a fixed number of frames
pub struct Pilot {
    rng: StdRng,
    delta_time: f32,
    remaining: usize,
    held: Vec<KeyCode>,
    fire_key: KeyCode,
}

impl Pilot {
    /// `frames` frames of `delta_time` seconds each
    pub fn new(seed: Option<u64>, delta_time: f32, frames: usize, fire_key: KeyCode) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            rng,
            delta_time,
            remaining: frames,
            held: Vec::new(),
            fire_key,
        }
    }

    /// Frames left to play
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    fn toggle(&mut self, key: KeyCode, mut frame: Frame) -> Frame {
        if let Some(index) = self.held.iter().position(|held| *held == key) {
            self.held.swap_remove(index);
            frame = frame.release(key);
        } else {
            self.held.push(key);
            frame = frame.press(key);
        }
        frame
    }
}

impl FrameSource for Pilot {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut frame = Frame::new(self.delta_time);

        // Fire is a tap: released on the frame after it was pressed
        if self.held.contains(&self.fire_key) || self.rng.gen_bool(FIRE_CHANCE) {
            frame = self.toggle(self.fire_key, frame);
        }

        for key in STEERING {
            if self.rng.gen_bool(STEER_TOGGLE_CHANCE) {
                frame = self.toggle(key, frame);
            }
        }

        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_engine::AppEvent;

    #[test]
    fn test_runs_for_requested_frames() {
        let mut pilot = Pilot::new(Some(1), 0.02, 3, KeyCode::Space);
        assert_eq!(pilot.remaining(), 3);
        for _ in 0..3 {
            let frame = pilot.next_frame().unwrap();
            assert!((frame.delta_time - 0.02).abs() < f32::EPSILON);
        }
        assert!(pilot.next_frame().is_none());
    }

    #[test]
    fn test_fire_is_always_released_next_frame() {
        let mut pilot = Pilot::new(Some(9), 1.0 / 60.0, 2000, KeyCode::Space);
        let mut fire_down = false;

        while let Some(frame) = pilot.next_frame() {
            for event in frame.events {
                match event {
                    AppEvent::KeyPressed(KeyCode::Space) => {
                        assert!(!fire_down);
                        fire_down = true;
                    }
                    AppEvent::KeyReleased(KeyCode::Space) => {
                        assert!(fire_down);
                        fire_down = false;
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_script() {
        let record = |seed| {
            let mut pilot = Pilot::new(Some(seed), 0.1, 200, KeyCode::Space);
            let mut events = Vec::new();
            while let Some(frame) = pilot.next_frame() {
                events.push(frame.events);
            }
            events
        };
        assert_eq!(record(5), record(5));
    }
}
