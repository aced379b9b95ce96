#![allow(dead_code)]
use std::cmp::Ordering;

use loser_tree::{IterSequence, SliceSequence, Tournament};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Enables `log` output for a test run, `RUST_LOG=trace` shows the tree's trace events
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Replays merge choices against the inputs
struct MergeChecker<'a, T> {
    heads: Vec<&'a [T]>,
    orig: &'a [Vec<T>],
}

impl<'a, T> MergeChecker<'a, T>
where
    T: core::fmt::Debug + Ord,
{
    fn new(orig: &'a [Vec<T>]) -> Self {
        Self {
            orig,
            heads: Vec::new(),
        }
    }

    fn check_merge(&mut self, merge: impl IntoIterator<Item = (T, usize)>, stable: bool) {
        // reset:
        self.heads.clear();
        self.heads.extend(self.orig.iter().map(Vec::as_slice));
        merge
            .into_iter()
            .for_each(|choice| self.check_choice(&choice, stable));

        assert!(
            self.heads.iter().all(|it| it.is_empty()),
            "Some values are not merged"
        );
    }

    fn check_choice(&mut self, (value, seq_idx): &(T, usize), stable: bool) {
        for (other_idx, head) in self
            .heads
            .iter()
            .enumerate()
            .filter_map(|(other_idx, items)| items.first().map(|head| (other_idx, head)))
        {
            match head.cmp(value) {
                Ordering::Less => {
                    panic!("chosen {value:?} is greater than {head:?} from sequence {other_idx}")
                }
                Ordering::Equal if stable => {
                    assert!(
                        other_idx >= *seq_idx,
                        "earlier sequence {other_idx} should've won over {value:?} from {seq_idx}"
                    );
                }
                _ => {}
            }
        }
        let Some((head, rest)) = self.heads[*seq_idx].split_first() else {
            panic!("value was taken from exhausted sequence {seq_idx}");
        };

        assert_eq!(head, value);
        self.heads[*seq_idx] = rest;
    }
}

/// Drains the tree through `pop`, collecting `(value, sequence index)` pairs
macro_rules! drain {
    ($tree:expr) => {{
        let mut tree = $tree;
        let mut res = Vec::new();
        while let Some(choice) = tree.pop() {
            res.push(choice);
        }
        res
    }};
}

/// Drains the tree through `winner`/`advance`, the way a hand-written merge loop would
macro_rules! drive {
    ($tree:expr) => {{
        let mut tree = $tree;
        let mut res = Vec::new();
        while !tree.is_exhausted() {
            let (value, idx) = tree.winner();
            res.push((value.clone(), idx));
            tree.advance();
        }
        res
    }};
}

/// Checks every tree configuration against sorted `input`.
/// `sentinel` must be greater than every value of `input`.
pub(crate) fn test_all_merges<T>(input: &Vec<Vec<T>>, sentinel: T)
where
    T: Ord + core::fmt::Debug + Clone,
{
    let slices = || input.iter().map(|items| SliceSequence::new(items));
    let iters = || input.iter().map(|items| IterSequence::new(items.iter().cloned()));

    let mut checker = MergeChecker::new(input);

    checker.check_merge(drain!(Tournament::new(slices(), sentinel.clone()).build()), true);
    checker.check_merge(
        drain!(Tournament::new(slices(), sentinel.clone())
            .arbitrary_tie_breaking()
            .build()),
        false,
    );
    checker.check_merge(drive!(Tournament::new(iters(), sentinel.clone()).build()), true);
    checker.check_merge(
        drive!(Tournament::new(iters(), sentinel.clone())
            .arbitrary_tie_breaking()
            .build()),
        false,
    );

    let mut expected: Vec<T> = input.iter().flatten().cloned().collect();
    expected.sort();
    assert_eq!(
        Tournament::new(slices(), sentinel.clone()).build().into_vec(),
        expected
    );
    assert_eq!(
        Tournament::new(iters(), sentinel)
            .with_cmp(|a: &T, b: &T| a.cmp(b))
            .arbitrary_tie_breaking()
            .build()
            .into_vec(),
        expected
    );
}

/// Generates `k` sorted sequences of up to `max_len` values drawn from `0..range`
pub(crate) fn random_sorted(rng: &mut StdRng, k: usize, max_len: usize, range: u32) -> Vec<Vec<u32>> {
    (0..k)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            let mut seq: Vec<u32> = (0..len).map(|_| rng.random_range(0..range)).collect();
            seq.sort_unstable();
            seq
        })
        .collect()
}

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
