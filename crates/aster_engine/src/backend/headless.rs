//! Headless backend: frames without a window

use crate::application::AppEvent;
use crate::input::KeyCode;
use std::collections::VecDeque;

/// One frame's worth of platform input
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Time step represented by this frame, in seconds
    pub delta_time: f32,
    /// Events delivered before the frame is updated
    pub events: Vec<AppEvent>,
}

impl Frame {
    /// A frame with no events
    pub fn new(delta_time: f32) -> Self {
        Self {
            delta_time,
            events: Vec::new(),
        }
    }

    /// Add an event (builder pattern)
    pub fn with_event(mut self, event: AppEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Add a key press (builder pattern)
    pub fn press(self, key: KeyCode) -> Self {
        self.with_event(AppEvent::KeyPressed(key))
    }

    /// Add a key release (builder pattern)
    pub fn release(self, key: KeyCode) -> Self {
        self.with_event(AppEvent::KeyReleased(key))
    }
}

/// Supplier of frames; the run loop ends when it returns `None`
pub trait FrameSource {
    /// Produce the next frame
    fn next_frame(&mut self) -> Option<Frame>;
}

/// Pre-recorded sequence of frames
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrames {
    frames: VecDeque<Frame>,
}

impl ScriptedFrames {
    /// Play back the given frames in order
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `count` empty frames of `delta_time` each
    pub fn idle(delta_time: f32, count: usize) -> Self {
        Self::new(std::iter::repeat_with(|| Frame::new(delta_time)).take(count))
    }

    /// Append a frame
    pub fn push(&mut self, frame: Frame) {
        self.frames.push_back(frame);
    }

    /// Frames left to play
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for ScriptedFrames {
    fn next_frame(&mut self) -> Option<Frame> {
        self.frames.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_frames_play_in_order() {
        let mut source = ScriptedFrames::new([
            Frame::new(0.1).press(KeyCode::Space),
            Frame::new(0.2).release(KeyCode::Space),
        ]);

        let first = source.next_frame().unwrap();
        assert_eq!(first.delta_time, 0.1);
        assert!(matches!(first.events.as_slice(), [AppEvent::KeyPressed(KeyCode::Space)]));
        assert_eq!(source.remaining(), 1);

        let second = source.next_frame().unwrap();
        assert!(matches!(second.events.as_slice(), [AppEvent::KeyReleased(KeyCode::Space)]));
        assert!(source.next_frame().is_none());
    }

    #[test]
    fn test_idle_frames() {
        let mut source = ScriptedFrames::idle(0.5, 3);
        assert_eq!(source.remaining(), 3);
        assert!(source.next_frame().is_some_and(|frame| frame.events.is_empty()));
    }
}
