//! Card identities.
//!
//! A deck holds the 28 values `1..=28`. Values `1..=26` stand for the
//! alphabet positions A through Z; 27 and 28 are the two jokers.
//!
//! ```
//! use solitaire_keystream::core::Card;
//!
//! let card = Card::new(3).unwrap();
//! assert_eq!(card.value(), 3);
//! assert!(!card.is_joker());
//!
//! assert!(Card::JOKER_A.is_joker());
//! assert_eq!(Card::new(29), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::InvalidDeck;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 28;

/// Number of non-joker cards (one per letter).
pub const ALPHABET_SIZE: u8 = 26;

/// A single card, guaranteed to hold a value in `1..=28`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Joker A, moved one place per step.
    pub const JOKER_A: Card = Card(27);

    /// Joker B, moved two places per step.
    pub const JOKER_B: Card = Card(28);

    /// Create a card, returning `None` outside `1..=28`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value as usize <= DECK_SIZE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw card value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this card is one of the two jokers.
    #[inline]
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 > ALPHABET_SIZE
    }

    /// The value used when this card drives a count.
    ///
    /// Jokers count as `joker_count`; every other card counts as its face
    /// value.
    #[inline]
    #[must_use]
    pub const fn count(self, joker_count: u8) -> u8 {
        if self.is_joker() {
            joker_count
        } else {
            self.0
        }
    }

    /// Iterate over every card in ascending order.
    pub fn all() -> impl Iterator<Item = Card> {
        (1..=DECK_SIZE as u8).map(Card)
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidDeck;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDeck::CardOutOfRange(value))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Card::JOKER_A => write!(f, "Joker A"),
            Card::JOKER_B => write!(f, "Joker B"),
            Card(v) => write!(f, "Card({})", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_range() {
        assert_eq!(Card::new(0), None);
        assert_eq!(Card::new(1).map(Card::value), Some(1));
        assert_eq!(Card::new(28), Some(Card::JOKER_B));
        assert_eq!(Card::new(29), None);
    }

    #[test]
    fn test_jokers() {
        assert!(Card::JOKER_A.is_joker());
        assert!(Card::JOKER_B.is_joker());
        assert!(!Card::new(26).unwrap().is_joker());
        assert_eq!(Card::all().filter(|c| c.is_joker()).count(), 2);
    }

    #[test]
    fn test_count() {
        assert_eq!(Card::new(5).unwrap().count(27), 5);
        assert_eq!(Card::JOKER_A.count(27), 27);
        assert_eq!(Card::JOKER_B.count(26), 26);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Card::try_from(12), Ok(Card::new(12).unwrap()));
        assert_eq!(Card::try_from(40), Err(InvalidDeck::CardOutOfRange(40)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Card::new(9).unwrap()), "Card(9)");
        assert_eq!(format!("{}", Card::JOKER_A), "Joker A");
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&Card::JOKER_A).unwrap();
        assert_eq!(json, "27");
        let back: Card = serde_json::from_str("4").unwrap();
        assert_eq!(back.value(), 4);
        assert!(serde_json::from_str::<Card>("0").is_err());
    }
}
