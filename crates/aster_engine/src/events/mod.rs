//! Event queue
//!
//! Producers `send` events during a frame; the owner drains the queue before
//! the frame ends, so every event is handled in the frame it was raised.

use std::collections::VecDeque;

/// FIFO queue of events of one type
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    pending: VecDeque<E>,
}

impl<E> EventQueue<E> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Queue an event for handling this frame
    pub fn send(&mut self, event: E) {
        self.pending.push_back(event);
    }

    /// Remove and yield every pending event in the order they were sent
    pub fn drain(&mut self) -> impl Iterator<Item = E> + '_ {
        self.pending.drain(..)
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
