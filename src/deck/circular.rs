//! Array-backed circular deck with a movable anchor.
//!
//! The 28 cards sit in a fixed ring of slots. No slot is structurally first:
//! the `anchor` slot marks the conceptual last card, and the slot after it
//! is the front. Every operation rewrites slots or the anchor index in
//! place; the ring never grows, shrinks or allocates after construction.
//!
//! ```text
//!   slots:   [ 9 | 27 | 3 | ... | 14 | 28 | 5 ]
//!                               anchor ^
//!   reading order: 5, 9, 27, 3, ..., 14, 28
//! ```
//!
//! Offsets used by [`CircularDeck::value_at`] and [`CardPosition::offset`]
//! count from the front, so offset 27 is always the anchor card.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, DECK_SIZE};
use crate::core::rng::DeckRng;
use crate::error::{DeckError, InvalidDeck, Result};

/// A card located in the ring, with the neighbors needed to splice it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPosition {
    /// Card immediately before `card` in reading order (wrapping).
    pub predecessor: Card,
    /// The located card.
    pub card: Card,
    /// Card immediately after `card` in reading order (wrapping).
    pub successor: Card,
    /// Distance from the front, in `0..28`.
    pub offset: usize,
}

/// Serializable deck snapshot: the 28 values from front to anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    /// Cards in reading order; the last entry is the anchor.
    pub cards: Vec<Card>,
}

/// A permutation of the 28 cards arranged in a ring with one anchor.
///
/// Two decks compare equal when they read the same from the front, no
/// matter which slot the anchor occupies internally.
#[derive(Clone, Debug)]
pub struct CircularDeck {
    /// Ring storage. Slot `(anchor + 1) % 28` holds the front card.
    slots: [Card; DECK_SIZE],

    /// Slot index of the anchor (conceptual last card).
    anchor: usize,
}

impl CircularDeck {
    /// Build a deck from values in reading order; the last value becomes
    /// the anchor.
    ///
    /// Fails unless `values` is a permutation of `1..=28`. Nothing is built
    /// on failure.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        if values.len() != DECK_SIZE {
            return Err(InvalidDeck::WrongSize {
                expected: DECK_SIZE,
                actual: values.len(),
            }
            .into());
        }

        let mut seen = [false; DECK_SIZE + 1];
        let mut slots = [Card::JOKER_A; DECK_SIZE];

        for (slot, &value) in slots.iter_mut().zip(values) {
            let card = Card::try_from(value)?;
            if seen[value as usize] {
                return Err(InvalidDeck::DuplicateCard(value).into());
            }
            seen[value as usize] = true;
            *slot = card;
        }

        Ok(Self {
            slots,
            anchor: DECK_SIZE - 1,
        })
    }

    /// Build a deck from cards in reading order.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        let values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
        Self::from_values(&values)
    }

    /// The sorted deck `1, 2, ..., 28` with Joker B at the anchor.
    #[must_use]
    pub fn ordered() -> Self {
        let mut slots = [Card::JOKER_A; DECK_SIZE];
        for (slot, card) in slots.iter_mut().zip(Card::all()) {
            *slot = card;
        }
        Self {
            slots,
            anchor: DECK_SIZE - 1,
        }
    }

    /// Deal a uniformly shuffled deck from a seeded RNG.
    #[must_use]
    pub fn shuffled(rng: &mut DeckRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.slots);
        deck
    }

    /// Restore a deck from a snapshot.
    pub fn from_state(state: &DeckState) -> Result<Self> {
        Self::from_cards(&state.cards)
    }

    /// Snapshot the deck in reading order.
    #[must_use]
    pub fn state(&self) -> DeckState {
        DeckState {
            cards: self.iter().collect(),
        }
    }

    #[inline]
    fn slot_at(&self, offset: usize) -> usize {
        (self.anchor + 1 + offset) % DECK_SIZE
    }

    /// The card right after the anchor.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Card {
        self.slots[self.slot_at(0)]
    }

    /// The anchor card (last in reading order).
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Card {
        self.slots[self.anchor]
    }

    /// The card `offset` steps past the front, wrapping around the ring.
    #[inline]
    #[must_use]
    pub fn value_at(&self, offset: usize) -> Card {
        self.slots[self.slot_at(offset)]
    }

    /// Locate a card and its two neighbors.
    ///
    /// Walks the ring from the front; a well-formed deck always finds the
    /// card, but a missing one is reported rather than assumed away.
    pub fn find_position(&self, card: Card) -> Result<CardPosition> {
        let offset = (0..DECK_SIZE)
            .find(|&offset| self.value_at(offset) == card)
            .ok_or(DeckError::CardNotFound(card))?;

        Ok(CardPosition {
            predecessor: self.value_at(offset + DECK_SIZE - 1),
            card,
            successor: self.value_at(offset + 1),
            offset,
        })
    }

    /// Make `card` the anchor. Relative order of all cards is unchanged;
    /// only the reading start moves.
    pub fn set_anchor(&mut self, card: Card) -> Result<()> {
        let position = self.find_position(card)?;
        self.anchor = self.slot_at(position.offset);
        Ok(())
    }

    /// Move `card` `count` places forward around the ring.
    ///
    /// The cards it passes each shift back one place. The anchor stays on
    /// its slot, so if the move crosses it, whichever card lands in that
    /// slot becomes the new anchor card.
    pub fn splice_move(&mut self, card: Card, count: usize) -> Result<()> {
        let position = self.find_position(card)?;
        let mut slot = self.slot_at(position.offset);

        for _ in 0..count % DECK_SIZE {
            let next = (slot + 1) % DECK_SIZE;
            self.slots[slot] = self.slots[next];
            slot = next;
        }
        self.slots[slot] = card;
        Ok(())
    }

    /// Cut within the first `span` cards: the leading `count` of them move,
    /// in order, to just after the remaining `span - count`.
    ///
    /// Cards past `span` keep their slots. With `span == 28` the whole ring
    /// rotates, which only moves the anchor.
    pub fn cut_front(&mut self, span: usize, count: usize) -> Result<()> {
        if span > DECK_SIZE || count > span {
            return Err(DeckError::InvariantViolation(format!(
                "cannot cut {} of the first {} cards",
                count, span
            )));
        }
        if count == 0 || count == span {
            return Ok(());
        }
        if span == DECK_SIZE {
            self.anchor = self.slot_at(count - 1);
            return Ok(());
        }

        let mut block = [Card::JOKER_A; DECK_SIZE];
        for (i, card) in block.iter_mut().take(span).enumerate() {
            *card = self.value_at((count + i) % span);
        }
        for (i, &card) in block.iter().take(span).enumerate() {
            let slot = self.slot_at(i);
            self.slots[slot] = card;
        }
        Ok(())
    }

    /// Iterate over the cards in reading order, front first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        (0..DECK_SIZE).map(move |offset| self.value_at(offset))
    }

    /// All cards in reading order.
    #[must_use]
    pub fn order(&self) -> [Card; DECK_SIZE] {
        let mut out = [Card::JOKER_A; DECK_SIZE];
        for (slot, card) in out.iter_mut().zip(self.iter()) {
            *slot = card;
        }
        out
    }

    /// Card values in reading order.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.iter().map(Card::value).collect()
    }

    /// Verify the ring still holds each card exactly once.
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = [false; DECK_SIZE + 1];
        for card in self.slots {
            if seen[card.value() as usize] {
                return Err(DeckError::InvariantViolation(format!(
                    "{} appears more than once",
                    card
                )));
            }
            seen[card.value() as usize] = true;
        }
        if self.anchor >= DECK_SIZE {
            return Err(DeckError::InvariantViolation(format!(
                "anchor slot {} is outside the ring",
                self.anchor
            )));
        }
        Ok(())
    }

    /// Overwrite the card at `offset` without any checks.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, offset: usize, card: Card) {
        let slot = self.slot_at(offset);
        self.slots[slot] = card;
    }
}

impl Default for CircularDeck {
    fn default() -> Self {
        Self::ordered()
    }
}

impl PartialEq for CircularDeck {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for CircularDeck {}

impl std::fmt::Display for CircularDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", card.value())?;
        }
        Ok(())
    }
}

/// Parse whitespace- or comma-separated card values in reading order.
impl FromStr for CircularDeck {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<u8>().map_err(|_| InvalidDeck::Parse {
                    token: token.to_string(),
                    position,
                })
            })
            .collect::<std::result::Result<Vec<u8>, InvalidDeck>>()?;

        Self::from_values(&values)
    }
}

impl TryFrom<DeckState> for CircularDeck {
    type Error = DeckError;

    fn try_from(state: DeckState) -> Result<Self> {
        Self::from_state(&state)
    }
}
