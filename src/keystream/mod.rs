//! Keystream generation: the deck steps and the key-drawing engine.

pub mod engine;
pub mod steps;

pub use engine::{KeystreamEngine, KeystreamStats};
pub use steps::{count_cut, move_joker_a, move_joker_b, shuffle_round, triple_cut};
