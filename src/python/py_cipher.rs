//! Cipher session bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::cipher::Solitaire;
use crate::core::KeystreamConfig;

use super::py_deck::PyDeck;
use super::to_py_err;

/// Python wrapper for a Solitaire session.
///
/// The session copies the deck it is given, so the same `Deck` can start
/// both an encrypting and a decrypting session.
#[pyclass(name = "Solitaire")]
#[derive(Clone, Debug)]
pub struct PySolitaire {
    inner: Solitaire,
}

#[pymethods]
impl PySolitaire {
    /// Start a session from a deck.
    #[new]
    #[pyo3(signature = (deck, max_draws=None, joker_count=None))]
    fn new(deck: PyRef<'_, PyDeck>, max_draws: Option<u32>, joker_count: Option<u8>) -> PyResult<Self> {
        let mut config = KeystreamConfig::default();
        if let Some(max_draws) = max_draws {
            config = config.with_max_draws(max_draws);
        }
        if let Some(joker_count) = joker_count {
            config = config.with_joker_count(joker_count);
        }

        Solitaire::with_config(deck.0.clone(), config)
            .map(|inner| Self { inner })
            .map_err(to_py_err)
    }

    /// Draw one key in 1..=26.
    fn next_key(&mut self) -> PyResult<u8> {
        self.inner.next_key().map_err(to_py_err)
    }

    /// Draw `n` keys as a numpy uint8 array.
    fn keystream<'py>(&mut self, py: Python<'py>, n: usize) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let keys = self.inner.keystream(n).map_err(to_py_err)?;
        Ok(PyArray1::from_vec_bound(py, keys))
    }

    /// Encrypt a message (non-letters dropped, letters uppercased).
    fn encrypt(&mut self, message: &str) -> PyResult<String> {
        self.inner.encrypt(message).map_err(to_py_err)
    }

    /// Decrypt a message.
    fn decrypt(&mut self, message: &str) -> PyResult<String> {
        self.inner.decrypt(message).map_err(to_py_err)
    }

    /// The session's current deck.
    #[getter]
    fn deck(&self) -> PyDeck {
        PyDeck(self.inner.engine().deck().clone())
    }

    /// Number of keys drawn so far.
    #[getter]
    fn keys_drawn(&self) -> u64 {
        self.inner.engine().stats().keys
    }

    fn __repr__(&self) -> String {
        format!(
            "Solitaire(keys_drawn={}, front={})",
            self.inner.engine().stats().keys,
            self.inner.engine().deck().front().value()
        )
    }
}
