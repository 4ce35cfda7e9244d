//! Deck bindings for Python.

use pyo3::prelude::*;

use crate::core::DeckRng;
use crate::deck::CircularDeck;

use super::to_py_err;

/// Python wrapper for CircularDeck.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub CircularDeck);

#[pymethods]
impl PyDeck {
    /// Create a deck from 28 values in reading order (last = anchor).
    #[new]
    fn new(values: Vec<u8>) -> PyResult<Self> {
        CircularDeck::from_values(&values).map(Self).map_err(to_py_err)
    }

    /// The sorted deck 1..28.
    #[staticmethod]
    fn ordered() -> Self {
        Self(CircularDeck::ordered())
    }

    /// A deterministically shuffled deck.
    #[staticmethod]
    fn shuffled(seed: u64) -> Self {
        Self(CircularDeck::shuffled(&mut DeckRng::new(seed)))
    }

    /// Parse whitespace or comma separated values.
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        text.parse().map(Self).map_err(to_py_err)
    }

    /// Card values from front to anchor.
    fn values(&self) -> Vec<u8> {
        self.0.values()
    }

    /// The front card value.
    #[getter]
    fn front(&self) -> u8 {
        self.0.front().value()
    }

    /// The anchor card value.
    #[getter]
    fn anchor(&self) -> u8 {
        self.0.anchor().value()
    }

    fn __len__(&self) -> usize {
        crate::core::DECK_SIZE
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Deck([{}])", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
