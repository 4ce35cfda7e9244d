//! Core types: cards, configuration, and the seeded deck RNG.
//!
//! Nothing here knows about the ring layout or the cipher; the deck and
//! keystream modules build on these.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, ALPHABET_SIZE, DECK_SIZE};
pub use config::KeystreamConfig;
pub use rng::{DeckRng, DeckRngState};
