#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate loser_tree;
use loser_tree::tests::SENTINEL;

fuzz_target!(|data: Vec<Vec<i8>>| {
    // sequences must be sorted and stay below the sentinel
    let data: Vec<Vec<i8>> = data
        .into_iter()
        .map(|mut seq| {
            seq.retain(|&item| item != SENTINEL);
            seq.sort_unstable();
            seq
        })
        .collect();
    loser_tree::tests::order::assert_correct_order(&data);
});
