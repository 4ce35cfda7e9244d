//! Keystream engine configuration.

use serde::{Deserialize, Serialize};

use crate::core::card::DECK_SIZE;
use crate::error::{DeckError, Result};

/// Tuning knobs for [`KeystreamEngine`](crate::KeystreamEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeystreamConfig {
    /// Maximum A-D cycles per key before the deck is declared corrupted.
    /// A healthy deck rarely needs more than a handful.
    pub max_draws: u32,

    /// Counting value of a joker in the count cut and key read (1..=27).
    /// At 27 a joker at the anchor leaves the count cut a no-op.
    pub joker_count: u8,
}

impl Default for KeystreamConfig {
    fn default() -> Self {
        Self {
            max_draws: 256,
            joker_count: (DECK_SIZE - 1) as u8,
        }
    }
}

impl KeystreamConfig {
    /// Set the draw cap.
    #[must_use]
    pub fn with_max_draws(mut self, max_draws: u32) -> Self {
        self.max_draws = max_draws;
        self
    }

    /// Set the joker counting value.
    #[must_use]
    pub fn with_joker_count(mut self, joker_count: u8) -> Self {
        self.joker_count = joker_count;
        self
    }

    /// Check that the values can drive an engine.
    pub fn validate(&self) -> Result<()> {
        if self.max_draws == 0 {
            return Err(DeckError::InvalidConfig(
                "max_draws must be at least 1".into(),
            ));
        }
        if self.joker_count == 0 || self.joker_count as usize >= DECK_SIZE {
            return Err(DeckError::InvalidConfig(format!(
                "joker_count {} is outside 1..={}",
                self.joker_count,
                DECK_SIZE - 1
            )));
        }
        Ok(())
    }
}
