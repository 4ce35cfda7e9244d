//! Python bindings for the Solitaire keystream.
//!
//! # Quick Start
//!
//! ```python
//! import solitaire_keystream as sk
//!
//! deck = sk.Deck.shuffled(seed=42)
//!
//! ciphertext = sk.Solitaire(deck).encrypt("Attack at dawn")
//! plaintext = sk.Solitaire(deck).decrypt(ciphertext)
//!
//! keys = sk.Solitaire(deck).keystream(16)  # numpy.ndarray[uint8]
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::DeckError;

mod py_cipher;
mod py_deck;

pub use py_cipher::*;
pub use py_deck::*;

/// Map a deck error onto the matching Python exception.
///
/// Bad input is a `ValueError`; a corrupted deck is a `RuntimeError`.
pub(crate) fn to_py_err(err: DeckError) -> PyErr {
    match err {
        DeckError::InvalidDeck(_) | DeckError::InvalidConfig(_) => {
            PyValueError::new_err(err.to_string())
        }
        DeckError::CardNotFound(_)
        | DeckError::InvariantViolation(_)
        | DeckError::DrawLimitExceeded { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}

/// solitaire_keystream: a 28-card Solitaire keystream and letter cipher.
#[pymodule]
fn solitaire_keystream(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDeck>()?;
    m.add_class::<PySolitaire>()?;
    Ok(())
}
