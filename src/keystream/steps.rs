//! The four deck transformations run before every key read.
//!
//! Each step is a free function over a [`CircularDeck`] so it can be driven
//! and tested in isolation. They must run in order A, B, C, D.
//!
//! Every step finds its jokers fresh. A joker that cannot be found means the
//! deck is corrupted; that is reported as [`DeckError::InvariantViolation`]
//! and never skipped.

use tracing::{trace, warn};

use crate::core::card::{Card, DECK_SIZE};
use crate::deck::{CardPosition, CircularDeck};
use crate::error::{DeckError, Result};

/// Locate a joker, promoting a miss to an invariant violation.
fn locate_joker(deck: &CircularDeck, joker: Card) -> Result<CardPosition> {
    deck.find_position(joker).map_err(|_| {
        warn!(%joker, deck = %deck, "joker missing from deck");
        DeckError::InvariantViolation(format!("{} is missing from the deck", joker))
    })
}

/// Step A: Joker A trades places with the card after it.
pub fn move_joker_a(deck: &mut CircularDeck) -> Result<()> {
    locate_joker(deck, Card::JOKER_A)?;
    deck.splice_move(Card::JOKER_A, 1)?;
    trace!(anchor = %deck.anchor(), front = %deck.front(), "step A");
    Ok(())
}

/// Step B: Joker B moves two places forward.
///
/// The anchor keeps its slot, so when Joker B crosses it the card that
/// slides into that slot becomes the new anchor card.
pub fn move_joker_b(deck: &mut CircularDeck) -> Result<()> {
    locate_joker(deck, Card::JOKER_B)?;
    deck.splice_move(Card::JOKER_B, 2)?;
    trace!(anchor = %deck.anchor(), front = %deck.front(), "step B");
    Ok(())
}

/// Step C: swap the cards above the first joker with the cards below the
/// second, leaving the jokers and everything between them in place.
///
/// ```text
///   [ top | J .. J | bottom ]  ->  [ bottom | J .. J | top ]
/// ```
///
/// Either outer block may be empty; the general rule covers every case.
pub fn triple_cut(deck: &mut CircularDeck) -> Result<()> {
    let a = locate_joker(deck, Card::JOKER_A)?;
    let b = locate_joker(deck, Card::JOKER_B)?;
    let (first, second) = if a.offset < b.offset { (a, b) } else { (b, a) };

    let middle = second.offset - first.offset + 1;
    let bottom = DECK_SIZE - 1 - second.offset;

    // Re-anchor on the last "top" card so the deck reads
    // [middle | bottom | top], then rotate middle past bottom.
    deck.set_anchor(first.predecessor)?;
    deck.cut_front(middle + bottom, middle)?;

    trace!(
        top = first.offset,
        middle,
        bottom,
        anchor = %deck.anchor(),
        "step C"
    );
    Ok(())
}

/// Step D: move as many cards from the front as the anchor card counts to
/// just before the anchor.
///
/// Jokers count as `joker_count`. The anchor card stays last.
pub fn count_cut(deck: &mut CircularDeck, joker_count: u8) -> Result<()> {
    let count = deck.anchor().count(joker_count) as usize;
    deck.cut_front(DECK_SIZE - 1, count)?;
    trace!(count, front = %deck.front(), "step D");
    Ok(())
}

/// Run steps A through D once.
pub fn shuffle_round(deck: &mut CircularDeck, joker_count: u8) -> Result<()> {
    move_joker_a(deck)?;
    move_joker_b(deck)?;
    triple_cut(deck)?;
    count_cut(deck, joker_count)
}
