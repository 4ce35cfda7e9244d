//! # solitaire-keystream
//!
//! A keystream generator driven by a 28-card deck, and the letter cipher
//! built on it. This is a small variant of Bruce Schneier's Solitaire: 26
//! letter cards plus two jokers, shuffled by four fixed steps before every
//! key.
//!
//! It is a teaching cipher. The alphabet and deck are tiny and nothing here
//! is meant to protect real data.
//!
//! ## Design Principles
//!
//! 1. **The deck is the state**: every key mutates one deck in place, and
//!    the keystream depends on the deck's entire history. Sessions own their
//!    deck exclusively.
//!
//! 2. **No structural first card**: the deck is a ring with a movable
//!    anchor. The anchor is a position, not a card, so moving a joker across
//!    it changes which card is last.
//!
//! 3. **Fail loudly**: a missing joker or a runaway retry loop is an error,
//!    never a silently wrong key.
//!
//! ## Modules
//!
//! - `core`: Card identities, engine configuration, seeded deck RNG
//! - `deck`: The circular deck and its positional primitives
//! - `keystream`: Steps A-D and key extraction
//! - `cipher`: Letter sanitizing, modular shifts, encrypt/decrypt sessions
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use solitaire_keystream::{CircularDeck, DeckRng, Solitaire};
//!
//! let deck = CircularDeck::shuffled(&mut DeckRng::new(2024));
//!
//! let ciphertext = Solitaire::new(deck.clone()).encrypt("Meet me at noon").unwrap();
//! let plaintext = Solitaire::new(deck).decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, "MEETMEATNOON");
//! ```

pub mod cipher;
pub mod core;
pub mod deck;
pub mod error;
pub mod keystream;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Card, DeckRng, DeckRngState, KeystreamConfig, ALPHABET_SIZE, DECK_SIZE};

pub use crate::deck::{CardPosition, CircularDeck, DeckState};

pub use crate::keystream::{KeystreamEngine, KeystreamStats};

pub use crate::cipher::Solitaire;

pub use crate::error::{DeckError, InvalidDeck, Result};
