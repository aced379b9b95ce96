#![allow(clippy::type_complexity)]
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{internal::Leaf, IterSequence, LoserTree, Sequence, Tournament};

/// Constructs a new [`LoserTree`] with default parameters:
/// * Uses `Vec` storage
/// * Yields values according to their [`Ord`] implementation, smallest-first
/// * Equal values are yielded in order of their respective sequences
pub fn merge<IT, S>(
    seqs: IT, sentinel: S::Item,
) -> LoserTree<
    true,
    S,
    S::Item,
    Vec<Leaf<S, S::Item>>,
    Vec<usize>,
    impl Fn(&S::Item, &S::Item) -> Ordering + Copy,
>
where
    IT: IntoIterator<Item = S>,
    S: Sequence,
    S::Item: Clone + Ord,
{
    Tournament::new(seqs, sentinel).build()
}

/// Constructs a new [`LoserTree`] with default parameters:
/// * Uses `Vec` storage
/// * Yields smallest values according to `func`
/// * Equal values are yielded in order of their respective sequences
pub fn merge_by<IT, S, F>(
    seqs: IT, sentinel: S::Item, func: F,
) -> LoserTree<true, S, S::Item, Vec<Leaf<S, S::Item>>, Vec<usize>, F>
where
    IT: IntoIterator<Item = S>,
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    Tournament::new(seqs, sentinel).with_cmp(func).build()
}

/// Like [`merge`], but takes plain iterators, wrapping each in an [`IterSequence`]
pub fn merge_iters<IT>(
    iters: IT, sentinel: <IT::Item as IntoIterator>::Item,
) -> LoserTree<
    true,
    IterSequence<<IT::Item as IntoIterator>::IntoIter>,
    <IT::Item as IntoIterator>::Item,
    Vec<
        Leaf<
            IterSequence<<IT::Item as IntoIterator>::IntoIter>,
            <IT::Item as IntoIterator>::Item,
        >,
    >,
    Vec<usize>,
    impl Fn(&<IT::Item as IntoIterator>::Item, &<IT::Item as IntoIterator>::Item) -> Ordering + Copy,
>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    <IT::Item as IntoIterator>::Item: Clone + Ord,
{
    merge(iters.into_iter().map(IterSequence::new), sentinel)
}
