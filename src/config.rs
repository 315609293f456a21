//! Game configuration
//!
//! All policy knobs live here so that every call site sees the same difficulty
//! band and limits.

use crate::puzzle::{DifficultyBand, SelectorConfig};

/// Default cap on submitted guesses before a day is lost
pub const DEFAULT_MAX_GUESSES: usize = 25;

/// Configuration shared by puzzle selection and game sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub selector: SelectorConfig,
    /// Number of submitted guesses (the start word excluded) after which the game is lost
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(selector: SelectorConfig, max_guesses: usize) -> Self {
        Self {
            selector,
            max_guesses,
        }
    }

    /// Replace the difficulty band
    #[must_use]
    pub const fn with_band(mut self, band: DifficultyBand) -> Self {
        self.selector.band = band;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(SelectorConfig::default(), DEFAULT_MAX_GUESSES)
    }
}
