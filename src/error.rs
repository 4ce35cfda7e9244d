//! Error types for deck construction and keystream generation.
//!
//! Only [`InvalidDeck`] is a recoverable, caller-facing failure. The other
//! [`DeckError`] variants signal a corrupted deck and should end the session.

use thiserror::Error;

use crate::core::Card;

/// Reasons a sequence of values cannot become a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDeck {
    /// The sequence does not hold exactly 28 values.
    #[error("expected {expected} cards, got {actual}")]
    WrongSize {
        /// Required deck size.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A value lies outside `1..=28`.
    #[error("card value {0} is outside 1..=28")]
    CardOutOfRange(u8),

    /// A value appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(u8),

    /// A token in textual input is not a card value.
    #[error("token {token:?} at position {position} is not a card value")]
    Parse {
        /// The offending token.
        token: String,
        /// Zero-based token index.
        position: usize,
    },
}

/// Errors produced by deck and keystream operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Construction input was not a permutation of `1..=28`.
    #[error("invalid deck: {0}")]
    InvalidDeck(#[from] InvalidDeck),

    /// A lookup targeted a card that is not in the deck.
    #[error("{0} not found in deck")]
    CardNotFound(Card),

    /// A transformation step found the deck in an impossible state.
    #[error("deck invariant violated: {0}")]
    InvariantViolation(String),

    /// Engine configuration is out of range.
    #[error("invalid keystream config: {0}")]
    InvalidConfig(String),

    /// Key extraction kept drawing jokers past the configured cap.
    #[error("no key produced after {attempts} draws")]
    DrawLimitExceeded {
        /// Number of A-D cycles performed.
        attempts: u32,
    },
}

/// Result alias for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
