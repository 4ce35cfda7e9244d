//! The circular card deck the keystream is drawn from.

pub mod circular;

pub use circular::{CardPosition, CircularDeck, DeckState};
