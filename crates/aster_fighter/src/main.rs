//! Aster Fighter headless runner
//!
//! Usage: `aster_fighter [config.toml|config.ron]`
//!
//! Loads the configuration, opens the high-score store and lets the scripted
//! pilot play one session through the engine.

use aster_engine::foundation::logging;
use aster_engine::foundation::time::Stopwatch;
use aster_engine::Engine;
use aster_fighter::pilot::Pilot;
use aster_fighter::{Director, GameConfig};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/aster_fighter.toml");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load(path.as_deref(), Path::new(DEFAULT_CONFIG_PATH))?;

    logging::init(&config.engine.log_level);
    log::info!("Starting Aster Fighter...");

    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {e}");
        return Err(e.into());
    }

    let preferences = config.session.open_preferences()?;
    log::info!("High score store: {}", preferences.path().display());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = (config.session.duration / config.engine.fixed_delta_time).ceil() as usize;
    let pilot = Pilot::new(
        config.session.seed,
        config.engine.fixed_delta_time,
        frames,
        config.controls.fire,
    );

    let engine_config = config.engine.clone();
    let mut director = Director::new(config, Box::new(preferences));

    let stopwatch = Stopwatch::start_new();
    Engine::run(engine_config, &mut director, pilot)?;

    log::info!(
        "Session over in {:.1}ms: {:?}, score {}, high score {}, {} lives left",
        stopwatch.elapsed_millis(),
        director.mode(),
        director.score().score(),
        director.score().high_score(),
        director.lives()
    );

    Ok(())
}
