//! Director scenarios driven through the engine frame loop

mod asteroid_field;

use crate::components::AsteroidSize;
use crate::config::{AsteroidConfig, GameConfig};
use crate::director::{Director, GameMode};
use crate::entities::Asteroid;
use aster_engine::backend::Frame;
use aster_engine::foundation::math::{ScreenBounds, Vec2};
use aster_engine::input::KeyCode;
use aster_engine::storage::MemoryPreferences;
use aster_engine::{Application, Engine};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

/// Asteroids launched with no push or spin, so positions stay put
fn still_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.session.seed = Some(7);
    config.asteroid = AsteroidConfig {
        min_impulse: 0.0,
        max_impulse: 0.0,
        min_torque: 0.0,
        max_torque: 0.0,
        ..AsteroidConfig::default()
    };
    config
}

fn still_asteroid(size: AsteroidSize, position: Vec2) -> Asteroid {
    let config = still_config();
    let mut asteroid = Asteroid::spawn(&mut StdRng::seed_from_u64(3), &ScreenBounds::default(), &config.asteroid, 1);
    asteroid.change_size(size);
    asteroid.set_position(position);
    asteroid
}

struct Harness {
    engine: Engine,
    director: Director,
}

impl Harness {
    fn new(config: GameConfig, preferences: MemoryPreferences) -> Self {
        let mut engine = Engine::new(config.engine.clone()).unwrap();
        let mut director = Director::new(config, Box::new(preferences));
        director.initialize(&mut engine).unwrap();
        Self { engine, director }
    }

    fn with_defaults() -> Self {
        Self::new(still_config(), MemoryPreferences::new())
    }

    fn step(&mut self, frame: Frame) {
        self.engine.step(&mut self.director, frame).unwrap();
    }

    fn frame(&mut self) {
        self.step(Frame::new(DT));
    }

    /// Press and release `key` over two frames
    fn tap(&mut self, key: KeyCode) {
        self.step(Frame::new(DT).press(key));
        self.step(Frame::new(DT).release(key));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn run_for(&mut self, seconds: f32) {
        for _ in 0..(seconds / DT).ceil() as usize {
            self.frame();
        }
    }

    /// Step until `done` holds; false if it never did within `max_frames`
    fn run_until(&mut self, max_frames: usize, done: impl Fn(&Director) -> bool) -> bool {
        for _ in 0..max_frames {
            if done(&self.director) {
                return true;
            }
            self.frame();
        }
        done(&self.director)
    }

    /// Tap start and wait for the ship
    fn start_game(&mut self) {
        self.tap(KeyCode::Space);
        assert!(self.run_until(600, |d| d.mode() == GameMode::Playing));
    }
}
