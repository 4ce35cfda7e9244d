//! Letter handling: sanitizing input and shifting alphabet positions.
//!
//! Positions are 1-based (`A = 1` .. `Z = 26`) to line up with card values.

use crate::core::card::ALPHABET_SIZE;

/// Keep only ASCII letters, uppercased. Everything else is dropped.
#[must_use]
pub fn sanitize(message: &str) -> String {
    message
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Alphabet position of an uppercase ASCII letter.
#[must_use]
pub fn letter_index(letter: char) -> Option<u8> {
    letter
        .is_ascii_uppercase()
        .then(|| letter as u8 - b'A' + 1)
}

/// Uppercase letter at a 1-based alphabet position, wrapping past Z.
#[must_use]
pub fn index_letter(index: u8) -> char {
    let zero_based = (index + ALPHABET_SIZE - 1) % ALPHABET_SIZE;
    (b'A' + zero_based) as char
}

/// Encryption shift: `((index + key - 1) mod 26) + 1`.
#[must_use]
pub fn shift_forward(index: u8, key: u8) -> u8 {
    (index + key - 1) % ALPHABET_SIZE + 1
}

/// Decryption shift: `((index - key + 26 - 1) mod 26) + 1`.
#[must_use]
pub fn shift_back(index: u8, key: u8) -> u8 {
    (index + ALPHABET_SIZE - key - 1) % ALPHABET_SIZE + 1
}
