//! Score and high score

use aster_engine::storage::Preferences;
use aster_engine::ui::TextBanner;

/// Current score and persisted high score, with their HUD banners.
///
/// The high score is read from the preference store once, on construction,
/// and written back whenever the current score reaches it.
pub struct ScoreTracker {
    score: u32,
    high_score: u32,
    key: String,
    preferences: Box<dyn Preferences>,
    score_banner: TextBanner,
    high_score_banner: TextBanner,
}

impl ScoreTracker {
    /// Load the high score stored under `key`; absent or unusable values read as 0
    pub fn new(preferences: Box<dyn Preferences>, key: impl Into<String>) -> Self {
        let key = key.into();
        let high_score = match preferences.get_int(&key) {
            None => 0,
            Some(stored) => u32::try_from(stored).unwrap_or_else(|_| {
                log::warn!("Ignoring out-of-range stored {key}: {stored}");
                0
            }),
        };
        log::info!("High score loaded: {high_score}");

        let mut tracker = Self {
            score: 0,
            high_score,
            key,
            preferences,
            score_banner: TextBanner::new(""),
            high_score_banner: TextBanner::new(""),
        };
        tracker.refresh_banners();
        tracker
    }

    /// Award one point
    pub fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
        if self.score >= self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.preferences.set_int(&self.key, i64::from(self.high_score)) {
                log::warn!("Failed to persist high score {}: {e}", self.high_score);
            }
        }
        self.refresh_banners();
    }

    /// Start a new game's score; the high score is kept
    pub fn reset_score(&mut self) {
        self.score = 0;
        self.refresh_banners();
    }

    /// Forget the high score, in memory and in the store
    pub fn reset_high_score(&mut self) {
        if let Err(e) = self.preferences.delete_key(&self.key) {
            log::warn!("Failed to delete stored high score: {e}");
        }
        self.high_score = 0;
        log::info!("High score reset");
        self.refresh_banners();
    }

    /// Points this game
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Best score so far
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    /// HUD text for the current score
    pub const fn score_banner(&self) -> &TextBanner {
        &self.score_banner
    }

    /// HUD text for the high score
    pub const fn high_score_banner(&self) -> &TextBanner {
        &self.high_score_banner
    }

    /// The backing preference store
    pub fn preferences(&self) -> &dyn Preferences {
        self.preferences.as_ref()
    }

    fn refresh_banners(&mut self) {
        self.score_banner.set_text(self.score.to_string());
        self.high_score_banner.set_text(self.high_score.to_string());
    }
}
