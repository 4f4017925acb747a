//! On-screen text
//!
//! The engine does not draw text; it keeps banner state a presentation layer
//! can read.

/// A piece of HUD text that can be shown or hidden
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBanner {
    text: String,
    enabled: bool,
}

impl TextBanner {
    /// Create a visible banner
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
        }
    }

    /// Replace the banner text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Show or hide the banner
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the banner is visible
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
