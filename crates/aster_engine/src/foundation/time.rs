//! Time management utilities

use std::time::{Duration, Instant};

/// Frame clock advanced by the delta time of every frame.
///
/// The clock does not read the wall clock itself; the frame source decides
/// how much time each frame represents, which keeps headless runs
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame (should be called once per frame)
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time.max(0.0);
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since the clock was created
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since clock creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Simple stopwatch for measuring elapsed wall-clock time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}

/// Countdown timer polled once per frame.
///
/// The timer never raises an event: owners tick it and poll [`Timer::finished`],
/// which latches once a run completes and stays set until the next
/// [`Timer::run`] or [`Timer::reset`].
#[derive(Debug, Clone, Default)]
pub struct Timer {
    duration: f32,
    elapsed: f32,
    running: bool,
    started: bool,
}

impl Timer {
    /// Create an idle timer with no duration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration in seconds.
    ///
    /// Ignored while the timer is running.
    pub fn set_duration(&mut self, duration: f32) {
        if !self.running {
            self.duration = duration;
        }
    }

    /// Configured duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time accumulated by the current (or last) run
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// (Re)start the timer from zero.
    ///
    /// A timer without a positive duration does not start.
    pub fn run(&mut self) {
        if self.duration > 0.0 {
            self.started = true;
            self.running = true;
            self.elapsed = 0.0;
        }
    }

    /// Advance a running timer, stopping it once the duration is reached
    pub fn tick(&mut self, delta_time: f32) {
        if self.running {
            self.elapsed += delta_time;
            if self.elapsed >= self.duration {
                self.running = false;
            }
        }
    }

    /// Stop and clear the timer so it no longer reports finished
    pub fn reset(&mut self) {
        self.started = false;
        self.running = false;
        self.elapsed = 0.0;
    }

    /// Whether a run is in progress
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a run has completed since the last `run` call
    pub fn finished(&self) -> bool {
        self.started && !self.running
    }
}
