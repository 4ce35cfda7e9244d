//! CircularDeck integration tests.
//!
//! Construction, textual input, and the positional primitives the
//! keystream steps are built from.

use proptest::prelude::*;

use solitaire_keystream::{Card, CircularDeck, DeckError, DeckRng, DeckState, InvalidDeck};

fn card(value: u8) -> Card {
    Card::new(value).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_construction_never_partially_succeeds() {
    let cases: Vec<(Vec<u8>, InvalidDeck)> = vec![
        (vec![], InvalidDeck::WrongSize { expected: 28, actual: 0 }),
        ((1..=27).collect(), InvalidDeck::WrongSize { expected: 28, actual: 27 }),
        ((1..=29).collect(), InvalidDeck::WrongSize { expected: 28, actual: 29 }),
        (
            (1..=26).chain([26, 28]).collect(),
            InvalidDeck::DuplicateCard(26),
        ),
        ((2..=29).collect(), InvalidDeck::CardOutOfRange(29)),
    ];

    for (values, expected) in cases {
        assert_eq!(
            CircularDeck::from_values(&values),
            Err(DeckError::InvalidDeck(expected))
        );
    }
}

#[test]
fn test_parse_deck_file_layout() {
    // One value per line, as decks are usually stored on disk.
    let text: String = (1..=28).rev().map(|v| format!("{}\n", v)).collect();
    let deck: CircularDeck = text.parse().unwrap();

    assert_eq!(deck.front(), Card::JOKER_B);
    assert_eq!(deck.anchor(), card(1));
    assert_eq!(deck.to_string().parse::<CircularDeck>().unwrap(), deck);
}

#[test]
fn test_parse_rejects_missing_joker() {
    let text = (1..=26).map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
    assert!(matches!(
        text.parse::<CircularDeck>(),
        Err(DeckError::InvalidDeck(InvalidDeck::WrongSize { actual: 26, .. }))
    ));
}

#[test]
fn test_state_rejects_tampered_snapshot() {
    let mut state = CircularDeck::ordered().state();
    state.cards[0] = Card::JOKER_A;

    assert_eq!(
        CircularDeck::from_state(&state),
        Err(DeckError::InvalidDeck(InvalidDeck::DuplicateCard(27)))
    );
}

#[test]
fn test_state_json_is_plain_value_list() {
    let json = serde_json::to_string(&CircularDeck::ordered().state()).unwrap();
    assert!(json.starts_with("{\"cards\":[1,2,3,"));

    let state: DeckState = serde_json::from_str(&json).unwrap();
    assert_eq!(CircularDeck::from_state(&state).unwrap(), CircularDeck::ordered());
}

// =============================================================================
// Seeded Shuffles
// =============================================================================

#[test]
fn test_forked_rngs_deal_distinct_decks() {
    let mut rng = DeckRng::new(1);
    let decks: Vec<CircularDeck> = (0..10)
        .map(|_| CircularDeck::shuffled(&mut rng.fork()))
        .collect();

    for (i, a) in decks.iter().enumerate() {
        assert!(a.check_invariants().is_ok());
        for b in &decks[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_rng_state_replays_deal() {
    let mut rng = DeckRng::new(8);
    let _ = CircularDeck::shuffled(&mut rng);

    let saved = rng.state();
    let expected = CircularDeck::shuffled(&mut rng);

    let mut replay = DeckRng::from_state(&saved);
    assert_eq!(CircularDeck::shuffled(&mut replay), expected);
}

// =============================================================================
// Properties
// =============================================================================

fn permutation() -> impl Strategy<Value = Vec<u8>> {
    Just((1..=28u8).collect::<Vec<u8>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn prop_construction_preserves_order(values in permutation()) {
        let deck = CircularDeck::from_values(&values).unwrap();
        prop_assert_eq!(deck.values(), values.clone());
        prop_assert_eq!(deck.anchor().value(), values[27]);
        prop_assert_eq!(deck.front().value(), values[0]);
    }

    #[test]
    fn prop_find_position_neighbors(values in permutation(), target in 1u8..=28) {
        let deck = CircularDeck::from_values(&values).unwrap();
        let position = deck.find_position(card(target)).unwrap();

        prop_assert_eq!(deck.value_at(position.offset), card(target));
        prop_assert_eq!(deck.value_at(position.offset + 1), position.successor);
        prop_assert_eq!(deck.value_at(position.offset + 27), position.predecessor);
    }

    #[test]
    fn prop_set_anchor_is_rotation(values in permutation(), target in 1u8..=28) {
        let mut deck = CircularDeck::from_values(&values).unwrap();
        deck.set_anchor(card(target)).unwrap();

        let split = values.iter().position(|&v| v == target).unwrap() + 1;
        let mut rotated = values[split..].to_vec();
        rotated.extend(&values[..split]);
        prop_assert_eq!(deck.values(), rotated);
    }

    #[test]
    fn prop_splice_move_keeps_others_in_order(
        values in permutation(),
        target in 1u8..=28,
        count in 0usize..28,
    ) {
        let mut deck = CircularDeck::from_values(&values).unwrap();
        let before = deck.find_position(card(target)).unwrap();
        deck.splice_move(card(target), count).unwrap();

        prop_assert!(deck.check_invariants().is_ok());

        // Reading the ring from the moved card, the card now sits `count`
        // places after its old successor chain.
        let after = deck.find_position(card(target)).unwrap();
        prop_assert_eq!(after.offset, (before.offset + count) % 28);

        let others = |d: &CircularDeck| -> Vec<u8> {
            let start = d.find_position(card(target)).unwrap().offset;
            (1..28).map(|i| d.value_at(start + i).value()).collect()
        };
        let mut original_others = others(&CircularDeck::from_values(&values).unwrap());
        let moved_others = others(&deck);
        // Other cards keep their cyclic order; only the start point shifts.
        original_others.rotate_left(count);
        prop_assert_eq!(moved_others, original_others);
    }
}
