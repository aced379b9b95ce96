//! Exposing a merge as a [`Sequence`].
//!
//! A [`LoserTree`] has its first winner ready as soon as it's built, while the [`Sequence`]
//! contract expects a call to [`advance`](Sequence::advance) before the first
//! [`current`](Sequence::current). [`MergedSequence`] bridges the two, which lets the output of
//! one tree become an input of another (e.g. merging per-shard merges).

use core::cmp::Ordering;

use crate::{internal::Leaf, storage::Storage, LoserTree, Sequence};

/// A [`LoserTree`] seen as a [`Sequence`] of its merged values.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "vec_storage")]
/// # {
/// use loser_tree::{merge, SliceSequence};
///
/// let shard_a = merge([SliceSequence::new(&[1, 4]), SliceSequence::new(&[6])], u8::MAX);
/// let shard_b = merge([SliceSequence::new(&[2, 3]), SliceSequence::new(&[5])], u8::MAX);
///
/// let all = merge([shard_a.into_merged(), shard_b.into_merged()], u8::MAX);
/// assert_eq!(all.into_vec(), vec![1, 2, 3, 4, 5, 6]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MergedSequence<Tree> {
    tree: Tree,
    started: bool,
}

impl<Tree> MergedSequence<Tree> {
    pub(crate) const fn new(tree: Tree) -> Self {
        Self {
            tree,
            started: false,
        }
    }

    /// Returns the underlying tree
    #[inline]
    pub fn into_inner(self) -> Tree {
        self.tree
    }
}

impl<const STABLE_TIE_BREAKING: bool, S, T, Leaves, Slots, Cmp> Sequence
    for MergedSequence<LoserTree<STABLE_TIE_BREAKING, S, T, Leaves, Slots, Cmp>>
where
    S: Sequence<Item = T>,
    T: Clone,
    Leaves: Storage<Item = Leaf<S, T>>,
    Slots: Storage<Item = usize>,
    Cmp: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    /// The first call exposes the winner chosen at construction, every later call
    /// consumes the current winner.
    #[inline]
    fn advance(&mut self) -> bool {
        if self.started {
            self.tree.advance()
        } else {
            self.started = true;
            !self.tree.is_exhausted()
        }
    }

    /// Current winner, or the tree's sentinel once it is exhausted
    #[inline]
    fn current(&self) -> &T {
        self.tree.winner().0
    }
}
