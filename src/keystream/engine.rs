//! Key extraction on top of the deck steps.
//!
//! ## Drawing a key
//!
//! 1. Run steps A-D on the deck.
//! 2. Count the front card's value past the front and read that card.
//! 3. If it is a joker, go back to 1 with the already-mutated deck.
//!
//! The deck is never reset between keys: each key depends on the deck's
//! whole history, so an encrypting and a decrypting engine stay in step
//! only if they start from identical decks and draw the same number of keys.
//!
//! ```
//! use solitaire_keystream::{CircularDeck, KeystreamEngine};
//!
//! let mut engine = KeystreamEngine::new(CircularDeck::ordered());
//! let keys = engine.keystream(4).unwrap();
//!
//! assert_eq!(keys, vec![8, 16, 11, 8]);
//! assert!(keys.iter().all(|k| (1..=26).contains(k)));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::steps;
use crate::core::config::KeystreamConfig;
use crate::deck::CircularDeck;
use crate::error::{DeckError, Result};

/// Running counters for one engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeystreamStats {
    /// Keys returned to callers.
    pub keys: u64,
    /// Full A-D cycles performed.
    pub draws: u64,
    /// Draws discarded because the counted card was a joker.
    pub rejected: u64,
}

/// Produces keys in `1..=26` from a deck it owns for the whole session.
#[derive(Clone, Debug)]
pub struct KeystreamEngine {
    deck: CircularDeck,
    config: KeystreamConfig,
    stats: KeystreamStats,
}

impl KeystreamEngine {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new(deck: CircularDeck) -> Self {
        Self {
            deck,
            config: KeystreamConfig::default(),
            stats: KeystreamStats::default(),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(deck: CircularDeck, config: KeystreamConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            deck,
            config,
            stats: KeystreamStats::default(),
        })
    }

    /// Draw the next key.
    ///
    /// Joker draws are retried silently. Hitting `max_draws` without a key
    /// means the deck is corrupted and the session should end.
    pub fn next_key(&mut self) -> Result<u8> {
        let joker_count = self.config.joker_count;

        for attempt in 1..=self.config.max_draws {
            steps::shuffle_round(&mut self.deck, joker_count)?;
            self.stats.draws += 1;

            let count = self.deck.front().count(joker_count) as usize;
            let card = self.deck.value_at(count);

            if !card.is_joker() {
                self.stats.keys += 1;
                return Ok(card.value());
            }

            self.stats.rejected += 1;
            debug!(attempt, %card, "counted card is a joker, drawing again");
        }

        warn!(
            attempts = self.config.max_draws,
            deck = %self.deck,
            "no key within draw limit"
        );
        Err(DeckError::DrawLimitExceeded {
            attempts: self.config.max_draws,
        })
    }

    /// Draw `len` keys in order.
    pub fn keystream(&mut self, len: usize) -> Result<Vec<u8>> {
        (0..len).map(|_| self.next_key()).collect()
    }

    /// Current deck state.
    #[must_use]
    pub fn deck(&self) -> &CircularDeck {
        &self.deck
    }

    /// Give the deck back, ending the session.
    #[must_use]
    pub fn into_deck(self) -> CircularDeck {
        self.deck
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &KeystreamConfig {
        &self.config
    }

    /// Counters since the engine was created.
    #[must_use]
    pub fn stats(&self) -> &KeystreamStats {
        &self.stats
    }
}

/// Endless key sequence. Stops only after an error has been yielded.
impl Iterator for KeystreamEngine {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_key())
    }
}
