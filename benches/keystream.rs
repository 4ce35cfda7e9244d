//! Keystream generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use solitaire_keystream::keystream::shuffle_round;
use solitaire_keystream::{CircularDeck, DeckRng, KeystreamEngine, Solitaire};

fn bench_shuffle_round(c: &mut Criterion) {
    let deck = CircularDeck::shuffled(&mut DeckRng::new(1));

    c.bench_function("shuffle_round", |b| {
        b.iter_batched(
            || deck.clone(),
            |mut deck| shuffle_round(black_box(&mut deck), 27),
            BatchSize::SmallInput,
        )
    });
}

fn bench_keystream(c: &mut Criterion) {
    let deck = CircularDeck::shuffled(&mut DeckRng::new(2));

    c.bench_function("keystream_1k", |b| {
        b.iter_batched(
            || KeystreamEngine::new(deck.clone()),
            |mut engine| engine.keystream(black_box(1000)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_encrypt(c: &mut Criterion) {
    let deck = CircularDeck::shuffled(&mut DeckRng::new(3));
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(30);

    c.bench_function("encrypt_1k_letters", |b| {
        b.iter_batched(
            || Solitaire::new(deck.clone()),
            |mut session| session.encrypt(black_box(&message)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_shuffle_round, bench_keystream, bench_encrypt);
criterion_main!(benches);
