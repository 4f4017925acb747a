//! Game director
//!
//! Runs the menu / playing / game-over state machine, keeps the asteroid
//! field topped up, splits shot asteroids and tracks lives.

use crate::components::AsteroidSize;
use crate::config::GameConfig;
use crate::entities::{Asteroid, AsteroidDestroyed, Ship};
use crate::scene::Scene;
use crate::score::ScoreTracker;
use aster_engine::ecs::FrameContext;
use aster_engine::events::EventQueue;
use aster_engine::foundation::math::{ScreenBounds, Vec2};
use aster_engine::foundation::time::Timer;
use aster_engine::input::{Axis, InputManager};
use aster_engine::storage::Preferences;
use aster_engine::ui::TextBanner;
use aster_engine::{AppError, Application, Engine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Director modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for the start key
    AwaitingStart,
    /// Start key seen; short pause before the ship appears
    Initiating,
    /// A game is in progress
    Playing,
    /// Out of lives; waiting for the start key
    GameOver,
}

/// The game's [`Application`]
pub struct Director {
    config: GameConfig,
    mode: GameMode,
    lives: u32,
    scene: Scene,
    score: ScoreTracker,
    timer: Timer,
    rng: StdRng,
    destroyed: EventQueue<AsteroidDestroyed>,
    ship_destroyed_at: Option<f32>,
    centre_message: TextBanner,
    reset_hint: TextBanner,
}

impl Director {
    /// Create a director; the high score is read from `preferences`
    pub fn new(config: GameConfig, preferences: Box<dyn Preferences>) -> Self {
        let rng = config
            .session
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let score = ScoreTracker::new(preferences, config.gameplay.high_score_key.clone());

        Self {
            mode: GameMode::AwaitingStart,
            lives: 0,
            scene: Scene::new(),
            score,
            timer: Timer::new(),
            rng,
            destroyed: EventQueue::new(),
            ship_destroyed_at: None,
            centre_message: TextBanner::new(format!("Press {:?} to start", config.controls.start)),
            reset_hint: TextBanner::new(format!(
                "Press {:?} to reset the high score",
                config.controls.reset_high_score
            )),
            config,
        }
    }

    /// Current mode
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Lives left this game
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Live entities
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Score and high score
    pub const fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// The start-delay / asteroid-spawn timer
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Title / game-over message
    pub const fn centre_message(&self) -> &TextBanner {
        &self.centre_message
    }

    /// High-score reset hint
    pub const fn reset_hint(&self) -> &TextBanner {
        &self.reset_hint
    }

    /// Configuration in use
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_menu_input(&mut self, input: &InputManager) {
        let controls = &self.config.controls;
        if input.is_key_pressed(controls.start) {
            self.timer.set_duration(self.config.gameplay.start_delay);
            self.timer.run();
            self.set_banners(false);
            self.mode = GameMode::Initiating;
            log::info!("Starting a new game");
        } else if input.is_key_pressed(controls.reset_high_score) {
            self.score.reset_high_score();
        }
    }

    fn start_game(&mut self) {
        self.spawn_ship();
        self.score.reset_score();
        self.lives = self.config.gameplay.starting_lives;
        self.ship_destroyed_at = None;

        self.timer.set_duration(self.config.gameplay.initial_spawn_delay);
        self.timer.run();
        self.mode = GameMode::Playing;
        log::info!("Game on with {} lives", self.lives);
    }

    fn update_playing(&mut self, now: f32, screen: &ScreenBounds) {
        let gameplay = &self.config.gameplay;

        if self.scene.ship().is_none() {
            let since_blowup = self.ship_destroyed_at.map_or(f32::INFINITY, |at| now - at);
            if since_blowup >= gameplay.respawn_delay {
                self.spawn_ship();
            }
        } else if self.scene.ship().is_some_and(Ship::wants_destroy) {
            self.scene.take_ship();
            self.ship_destroyed_at = Some(now);
            self.lives = self.lives.saturating_sub(1);
            log::info!("Ship destroyed, {} lives left", self.lives);

            if self.lives == 0 {
                self.game_over();
            }
        }

        if self.timer.finished() {
            if self.scene.asteroids().len() < self.config.gameplay.max_asteroids {
                self.spawn_fresh_asteroid(screen);
            } else {
                log::debug!("Asteroid cap reached, skipping spawn");
            }

            let gameplay = &self.config.gameplay;
            let next = self
                .rng
                .gen_range(gameplay.spawn_interval_min..=gameplay.spawn_interval_max);
            self.timer.set_duration(next);
            self.timer.run();
        }
    }

    fn game_over(&mut self) {
        let cleared = self.scene.clear_asteroids();
        self.mode = GameMode::GameOver;
        self.set_banners(true);
        self.timer.reset();
        log::info!(
            "Game over: score {}, high score {} ({cleared} asteroids cleared)",
            self.score.score(),
            self.score.high_score()
        );
    }

    fn spawn_ship(&mut self) {
        self.scene
            .spawn_ship(Ship::new(&self.config.ship, self.config.controls.fire));
        log::debug!("Ship spawned");
    }

    fn new_asteroid(&mut self, screen: &ScreenBounds) -> Asteroid {
        Asteroid::spawn(
            &mut self.rng,
            screen,
            &self.config.asteroid,
            self.config.prefabs.asteroids.len(),
        )
    }

    /// Add a randomly placed asteroid of random size
    fn spawn_fresh_asteroid(&mut self, screen: &ScreenBounds) {
        let asteroid = self.new_asteroid(screen);
        log::debug!(
            "Spawning {:?} asteroid at ({:.2}, {:.2})",
            asteroid.size(),
            asteroid.position().x,
            asteroid.position().y
        );
        self.scene.spawn_asteroid(asteroid);
    }

    fn spawn_replacements(&mut self, screen: &ScreenBounds, size: AsteroidSize, position: Vec2) {
        for _ in 0..2 {
            let mut asteroid = self.new_asteroid(screen);
            asteroid.change_size(size);
            asteroid.set_position(position);
            self.scene.spawn_asteroid(asteroid);
        }
        log::debug!("Split into two {size:?} asteroids at ({:.2}, {:.2})", position.x, position.y);
    }

    /// Apply the split policy to one destroyed asteroid
    pub(crate) fn handle_asteroid_destroyed(&mut self, notice: AsteroidDestroyed, screen: &ScreenBounds) {
        if self.mode != GameMode::Playing {
            log::debug!("Ignoring destroyed {:?} asteroid outside play", notice.size);
            return;
        }

        match notice.size.split_into() {
            Some(smaller) => self.spawn_replacements(screen, smaller, notice.position),
            None => self.score.add_point(),
        }
    }

    fn process_destroyed(&mut self, screen: &ScreenBounds) {
        let notices: Vec<AsteroidDestroyed> = self.destroyed.drain().collect();
        for notice in notices {
            self.handle_asteroid_destroyed(notice, screen);
        }
    }

    fn set_banners(&mut self, enabled: bool) {
        self.centre_message.set_enabled(enabled);
        self.reset_hint.set_enabled(enabled);
    }
}

impl Application for Director {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        if let Err(e) = self.config.validate().and_then(|()| self.config.prefabs.validate()) {
            log::error!("Cannot start the director: {e}");
            return Err(e.into());
        }

        let controls = &self.config.controls;
        engine.input.bind_axis(Axis::Horizontal, controls.horizontal.clone());
        engine.input.bind_axis(Axis::Vertical, controls.vertical.clone());

        self.mode = GameMode::AwaitingStart;
        self.set_banners(true);
        log::info!(
            "Director ready: {} asteroid variants, high score {}",
            self.config.prefabs.asteroids.len(),
            self.score.high_score()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        self.timer.tick(delta_time);

        let screen = *engine.screen();
        match self.mode {
            GameMode::AwaitingStart | GameMode::GameOver => self.handle_menu_input(engine.input()),
            GameMode::Initiating => {
                if self.timer.finished() {
                    self.start_game();
                }
            }
            GameMode::Playing => self.update_playing(engine.time(), &screen),
        }

        let ctx = FrameContext {
            input: engine.input(),
            bounds: &screen,
            delta_time,
        };
        self.scene.step(&ctx, &self.config.projectile, &mut self.destroyed);
        self.process_destroyed(&screen);

        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!(
            "Director shutting down in {:?}: score {}, high score {}",
            self.mode,
            self.score.score(),
            self.score.high_score()
        );
    }
}
