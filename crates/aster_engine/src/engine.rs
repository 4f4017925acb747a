//! Core engine implementation

use crate::{
    application::{Application, AppError, AppEvent},
    backend::{Frame, FrameSource},
    foundation::{math::ScreenBounds, time::FrameClock},
    input::InputManager,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the host services and drives the main loop.
pub struct Engine {
    /// Input handling system
    pub input: InputManager,

    /// Frame timing
    clock: FrameClock,

    /// Visible play-field
    screen: ScreenBounds,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        if !config.screen.is_valid() {
            return Err(EngineError::InitializationFailed(format!(
                "Screen bounds are empty: {:?}",
                config.screen
            )));
        }
        if config.fixed_delta_time.is_nan() || config.fixed_delta_time <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "fixed_delta_time must be positive, got {}",
                config.fixed_delta_time
            )));
        }

        log::debug!(
            "Play-field {}x{} units",
            config.screen.width(),
            config.screen.height()
        );

        Ok(Self {
            input: InputManager::new(),
            clock: FrameClock::new(),
            screen: config.screen,
            config,
            running: true,
        })
    }

    /// Run the engine main loop with the given application until the frame
    /// source runs dry or the application quits
    pub fn run<T, S>(config: EngineConfig, app: &mut T, mut source: S) -> Result<(), EngineError>
    where
        T: Application,
        S: FrameSource,
    {
        let mut engine = Self::new(config)?;

        // Initialize application; a failure skips the loop but not cleanup
        let mut result = app
            .initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")));

        if result.is_ok() {
            log::info!("Starting main loop...");
        }

        while result.is_ok() && engine.running {
            let Some(frame) = source.next_frame() else {
                log::info!("Frame source exhausted");
                break;
            };

            if let Err(e) = engine.step(app, frame) {
                result = Err(e);
                break;
            }
        }

        // Cleanup runs even when initialization or a frame failed
        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.1}s simulated)",
            engine.frame_count(),
            engine.time()
        );
        result
    }

    /// Process one frame: deliver its events, advance the clock, update the
    /// application, then clear this frame's input edges
    pub fn step<T: Application>(&mut self, app: &mut T, frame: Frame) -> Result<(), EngineError> {
        for event in frame.events {
            app.handle_event(self, event)
                .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;
        }

        self.clock.advance(frame.delta_time);
        let delta_time = self.clock.delta_time();

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

        self.input.update();
        Ok(())
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::CloseRequested => {
                self.quit();
            }
            AppEvent::KeyPressed(key) => {
                self.input.handle_key_input(key, true);
            }
            AppEvent::KeyReleased(key) => {
                self.input.handle_key_input(key, false);
            }
        }

        Ok(())
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop will run another frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Visible play-field bounds
    pub fn screen(&self) -> &ScreenBounds {
        &self.screen
    }

    /// Engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Simulated seconds since the engine started
    pub fn time(&self) -> f32 {
        self.clock.total_time()
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }

    /// Frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Visible play-field in world units
    pub screen: ScreenBounds,

    /// Time step used by frame sources that do not measure real time
    pub fixed_delta_time: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            screen: ScreenBounds::default(),
            fixed_delta_time: 1.0 / 60.0,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedFrames;
    use crate::input::KeyCode;

    #[derive(Default)]
    struct Recorder {
        initialized: bool,
        fail_init: bool,
        updates: u32,
        space_presses: u32,
        cleaned_up: bool,
        quit_after: Option<u32>,
        fail_on: Option<u32>,
    }

    impl Application for Recorder {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            self.initialized = true;
            if self.fail_init {
                return Err(AppError::Asset("missing".to_string()));
            }
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            if engine.input().is_key_pressed(KeyCode::Space) {
                self.space_presses += 1;
            }
            if self.fail_on == Some(self.updates) {
                return Err(AppError::Custom("boom".to_string()));
            }
            if self.quit_after == Some(self.updates) {
                engine.quit();
            }
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    #[test]
    fn test_run_until_source_exhausted() {
        let mut app = Recorder::default();
        Engine::run(EngineConfig::default(), &mut app, ScriptedFrames::idle(0.1, 5)).unwrap();

        assert!(app.initialized);
        assert_eq!(app.updates, 5);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = Recorder {
            quit_after: Some(2),
            ..Default::default()
        };
        Engine::run(EngineConfig::default(), &mut app, ScriptedFrames::idle(0.1, 10)).unwrap();
        assert_eq!(app.updates, 2);
    }

    #[test]
    fn test_close_request_stops_loop() {
        let mut app = Recorder::default();
        let frames = ScriptedFrames::new([
            Frame::new(0.1),
            Frame::new(0.1).with_event(AppEvent::CloseRequested),
            Frame::new(0.1),
        ]);
        Engine::run(EngineConfig::default(), &mut app, frames).unwrap();
        // The frame carrying the close request still updates
        assert_eq!(app.updates, 2);
    }

    #[test]
    fn test_update_error_still_cleans_up() {
        let mut app = Recorder {
            fail_on: Some(3),
            ..Default::default()
        };
        let result = Engine::run(EngineConfig::default(), &mut app, ScriptedFrames::idle(0.1, 10));

        assert!(matches!(result, Err(EngineError::ApplicationError(_))));
        assert_eq!(app.updates, 3);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_failed_initialize_skips_loop_but_cleans_up() {
        let mut app = Recorder {
            fail_init: true,
            ..Default::default()
        };
        let result = Engine::run(EngineConfig::default(), &mut app, ScriptedFrames::idle(0.1, 10));

        assert!(matches!(result, Err(EngineError::ApplicationError(_))));
        assert_eq!(app.updates, 0);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_key_press_is_an_edge_for_one_frame() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let mut app = Recorder::default();

        engine.step(&mut app, Frame::new(0.1).press(KeyCode::Space)).unwrap();
        engine.step(&mut app, Frame::new(0.1)).unwrap();

        assert_eq!(app.space_presses, 1);
        assert!(engine.input().is_key_down(KeyCode::Space));
        assert_eq!(engine.frame_count(), 2);
        assert!((engine.time() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_screen_is_rejected() {
        let config = EngineConfig {
            screen: ScreenBounds::new(1.0, -1.0, 0.0, 1.0),
            ..Default::default()
        };
        assert!(matches!(Engine::new(config), Err(EngineError::InitializationFailed(_))));
    }
}
