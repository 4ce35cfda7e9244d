//! Letter cipher built on the keystream.
//!
//! These pieces sit outside the deck core: they only call
//! [`KeystreamEngine::next_key`](crate::KeystreamEngine::next_key) once per
//! letter and apply the modular shift.

pub mod alphabet;
pub mod session;

pub use alphabet::{index_letter, letter_index, sanitize, shift_back, shift_forward};
pub use session::Solitaire;
