#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate loser_tree;
use loser_tree::{IterSequence, SliceSequence, Tournament};
use std::hint::black_box;

fn consume<T>(item: T) {
    drop(black_box(item))
}

fuzz_target!(|data: Vec<Vec<i8>>| {
    // unsorted input must not break the tree, only the order of its output
    Tournament::new(data.iter().map(|it| SliceSequence::new(it)), i8::MAX)
        .build()
        .for_each(consume);
    Tournament::new(data.iter().map(|it| IterSequence::new(it.iter().copied())), i8::MAX)
        .arbitrary_tie_breaking()
        .build()
        .for_each(consume);

    const CAP: usize = 16;
    let mut tree = Tournament::new_stackvec::<CAP>(
        data.iter().take(CAP).map(|it| SliceSequence::new(it)),
        i8::MAX,
    )
    .build();
    while !tree.is_exhausted() {
        consume(tree.winner());
        tree.advance();
    }
    assert!(!tree.advance());
});
