//! One encryption or decryption session over a single deck.

use crate::core::config::KeystreamConfig;
use crate::deck::CircularDeck;
use crate::error::Result;
use crate::keystream::KeystreamEngine;

use super::alphabet::{index_letter, letter_index, sanitize, shift_back, shift_forward};

/// Letter cipher driven by a Solitaire keystream.
///
/// Each letter consumes one key, so a session must not be shared between
/// messages that are expected to decrypt independently. Decrypt with a
/// fresh session started from a copy of the same deck.
///
/// ```
/// use solitaire_keystream::{CircularDeck, Solitaire};
///
/// let deck = CircularDeck::ordered();
///
/// let ciphertext = Solitaire::new(deck.clone()).encrypt("Hello, World").unwrap();
/// assert_eq!(ciphertext, "PUWTUVTSFK");
///
/// let plaintext = Solitaire::new(deck).decrypt(&ciphertext).unwrap();
/// assert_eq!(plaintext, "HELLOWORLD");
/// ```
#[derive(Clone, Debug)]
pub struct Solitaire {
    engine: KeystreamEngine,
}

impl Solitaire {
    /// Start a session from a deck.
    #[must_use]
    pub fn new(deck: CircularDeck) -> Self {
        Self {
            engine: KeystreamEngine::new(deck),
        }
    }

    /// Start a session with a custom engine configuration.
    pub fn with_config(deck: CircularDeck, config: KeystreamConfig) -> Result<Self> {
        Ok(Self {
            engine: KeystreamEngine::with_config(deck, config)?,
        })
    }

    /// Encrypt a message. Non-letters are dropped and letters uppercased
    /// before any key is drawn.
    pub fn encrypt(&mut self, message: &str) -> Result<String> {
        self.transform(message, shift_forward)
    }

    /// Decrypt a message. Input is sanitized the same way as for
    /// [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, message: &str) -> Result<String> {
        self.transform(message, shift_back)
    }

    fn transform(&mut self, message: &str, shift: fn(u8, u8) -> u8) -> Result<String> {
        let letters = sanitize(message);
        let mut out = String::with_capacity(letters.len());

        for index in letters.chars().filter_map(letter_index) {
            let key = self.engine.next_key()?;
            out.push(index_letter(shift(index, key)));
        }
        Ok(out)
    }

    /// Draw one raw key.
    pub fn next_key(&mut self) -> Result<u8> {
        self.engine.next_key()
    }

    /// Draw raw keys without encrypting anything.
    pub fn keystream(&mut self, len: usize) -> Result<Vec<u8>> {
        self.engine.keystream(len)
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &KeystreamEngine {
        &self.engine
    }
}
