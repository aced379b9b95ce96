//! Implementation of [`LoserTree`]

use core::{cmp::Ordering, iter::FusedIterator, marker::PhantomData, mem};

#[cfg(feature = "vec_storage")]
use alloc::vec::Vec;

use crate::{
    internal::{first_match, Leaf},
    storage::{SealedToken, Storage},
    MergedSequence, Sequence,
};

mod builder;
pub use builder::Tournament;

/// Tournament tree merging `k` sorted [`Sequence`]s.
///
/// Every sequence owns a leaf holding the value last read from it. Each match position
/// stores the index of the sequence that *lost* the match played there, and slot 0 holds the
/// overall winner: the sequence with the smallest cached value. Consuming the winner reads
/// the next value of that one sequence and replays only the matches on its path to the root,
/// which costs `O(log k)` comparisons.
///
/// Exhausted sequences are represented by the sentinel value, which must compare greater than
/// or equal to every value any sequence can produce. Real values equal to the sentinel may be
/// treated as the end of the merge.
///
/// Constructed by [`Tournament`] or the [`merge`](crate::merge) family of functions.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "vec_storage")]
/// # {
/// use loser_tree::{SliceSequence, Tournament};
///
/// let mut tree = Tournament::new(
///     [SliceSequence::new(&[3, 4, 5]), SliceSequence::new(&[1, 2])],
///     u64::MAX,
/// )
/// .build();
///
/// assert_eq!(tree.winner(), (&1, 1));
/// assert!(tree.advance());
/// assert_eq!(tree.winner(), (&2, 1));
/// assert!(tree.advance());
/// assert_eq!(tree.winner(), (&3, 0));
/// assert_eq!(tree.into_vec(), vec![3, 4, 5]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LoserTree<const STABLE_TIE_BREAKING: bool, S, T, Leaves, Slots, Cmp> {
    leaves: Leaves,
    slots: Slots,
    sentinel: T,
    cmp: Cmp,
    // `S` otherwise only appears inside `Leaves`, so `&self` would not imply `S: 'a`
    _seqs: PhantomData<S>,
}

impl<const STABLE_TIE_BREAKING: bool, S, T, Leaves, Slots, Cmp>
    LoserTree<STABLE_TIE_BREAKING, S, T, Leaves, Slots, Cmp>
where
    S: Sequence<Item = T>,
    T: Clone,
    Leaves: Storage<Item = Leaf<S, T>>,
    Slots: Storage<Item = usize>,
    Cmp: Fn(&T, &T) -> Ordering,
{
    /// Primes every sequence and plays the initial tournament
    pub(crate) fn new(seqs: impl IntoIterator<Item = S>, sentinel: T, cmp: Cmp) -> Self {
        let leaves = Leaves::from_items(
            seqs.into_iter().map(|seq| Leaf::prime(seq, &sentinel)),
            SealedToken,
        );
        let k = leaves.len(SealedToken);
        let slots = Slots::from_items(core::iter::repeat(0).take(k), SealedToken);
        debug_assert_eq!(slots.len(SealedToken), k);

        let mut tree = Self {
            leaves,
            slots,
            sentinel,
            cmp,
            _seqs: PhantomData,
        };
        if k > 1 {
            let winner = tree.play(1);
            *tree.slots.get_mut(0, SealedToken) = winner;
        }
        log::trace!(
            "loser tree built over {k} sequences, {}",
            if tree.is_exhausted() { "exhausted" } else { "active" }
        );
        tree
    }

    /// Number of merged sequences, including exhausted ones
    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len(SealedToken)
    }

    /// Returns true if the tree was built over zero sequences
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value that stands in for exhausted sequences
    #[inline]
    pub fn sentinel(&self) -> &T {
        &self.sentinel
    }

    #[inline(always)]
    fn leaf(&self, idx: usize) -> &Leaf<S, T> {
        debug_assert!(idx < self.len());
        self.leaves.get(idx, SealedToken)
    }

    #[inline(always)]
    fn winner_idx(&self) -> usize {
        *self.slots.get(0, SealedToken)
    }

    /// Returns true if `challenger` takes the place of `holder` in a match.
    ///
    /// With stable tie breaking equal values are ordered by sequence index, otherwise
    /// the holder keeps its place on ties.
    #[inline(always)]
    fn beats(&self, challenger: usize, holder: usize) -> bool {
        let ord = (self.cmp)(&self.leaf(challenger).value, &self.leaf(holder).value);
        if STABLE_TIE_BREAKING {
            ord.then(challenger.cmp(&holder)).is_lt()
        } else {
            ord.is_lt()
        }
    }

    /// Plays every match under heap position `pos`, storing the losers along the way.
    /// Returns the index of the sequence that won the subtree.
    fn play(&mut self, pos: usize) -> usize {
        let k = self.len();
        if pos >= k {
            return pos - k;
        }
        let left = self.play(2 * pos);
        let right = self.play(2 * pos + 1);
        let (winner, loser) = if self.beats(right, left) {
            (right, left)
        } else {
            (left, right)
        };
        *self.slots.get_mut(pos, SealedToken) = loser;
        winner
    }

    /// Re-resolves the matches on the path from `leaf` to the root after its value changed
    fn replay(&mut self, leaf: usize) {
        let mut candidate = leaf;
        let mut pos = first_match(self.len(), leaf);
        while pos != 0 {
            let stored = *self.slots.get(pos, SealedToken);
            if !self.beats(candidate, stored) {
                *self.slots.get_mut(pos, SealedToken) = candidate;
                candidate = stored;
            }
            pos /= 2;
        }
        *self.slots.get_mut(0, SealedToken) = candidate;
    }

    /// Reads the next value of the winning sequence and replays its path.
    /// Returns the value it replaced. Must not be called on an exhausted tree.
    fn pull(&mut self, winner: usize) -> T {
        let leaf = self.leaves.get_mut(winner, SealedToken);
        let next = if leaf.seq.advance() {
            leaf.seq.current().clone()
        } else {
            leaf.live = false;
            self.sentinel.clone()
        };
        let prev = mem::replace(&mut leaf.value, next);
        self.replay(winner);
        if self.is_exhausted() {
            log::trace!("all {} sequences of the loser tree are exhausted", self.len());
        }
        prev
    }

    /// Returns true once every sequence is exhausted. This state is terminal.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.is_empty() || !self.leaf(self.winner_idx()).live
    }

    /// Returns the current winning value and the index of the sequence it came from.
    ///
    /// When the tree is exhausted the value is the sentinel; the index is then 0 for a tree
    /// without sequences and the last sequence to win otherwise.
    #[inline]
    pub fn winner(&self) -> (&T, usize) {
        if self.is_empty() {
            return (&self.sentinel, 0);
        }
        let idx = self.winner_idx();
        (&self.leaf(idx).value, idx)
    }

    /// Like [`winner`](Self::winner), but returns `None` once the tree is exhausted
    #[inline]
    pub fn peek(&self) -> Option<(&T, usize)> {
        if self.is_exhausted() {
            return None;
        }
        Some(self.winner())
    }

    /// Consumes the current winner and moves to the next one.
    ///
    /// Returns `false` if every sequence is exhausted afterwards, in which case
    /// [`winner`](Self::winner) reports the sentinel. Calling it on an exhausted tree
    /// does nothing and returns `false`.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.pull(self.winner_idx());
        !self.is_exhausted()
    }

    /// Takes the current winning value out of the tree together with the index of its
    /// sequence, then moves to the next winner. Returns `None` once the tree is exhausted.
    ///
    /// Unlike [`winner`](Self::winner) followed by [`advance`](Self::advance) this moves
    /// the value out instead of cloning it.
    #[inline]
    pub fn pop(&mut self) -> Option<(T, usize)> {
        if self.is_exhausted() {
            return None;
        }
        let idx = self.winner_idx();
        Some((self.pull(idx), idx))
    }

    /// Returns the next value if it satisfies a predicate.
    ///
    /// This method behaves identically to [`Peekable::next_if`] from the standard library.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "vec_storage")]
    /// # {
    /// use loser_tree::{merge, SliceSequence};
    ///
    /// let mut tree = merge(
    ///     [SliceSequence::new(&[1, 1, 2]), SliceSequence::new(&[1, 3])],
    ///     i32::MAX,
    /// );
    ///
    /// // Consume all 1s
    /// while let Some(item) = tree.next_if(|&x| x == 1) {
    ///     assert_eq!(item, 1);
    /// }
    ///
    /// assert_eq!(tree.next(), Some(2));
    /// # }
    /// ```
    ///
    /// [`Peekable::next_if`]: core::iter::Peekable::next_if
    pub fn next_if(&mut self, func: impl FnOnce(&T) -> bool) -> Option<T> {
        match self.peek() {
            Some((item, _)) if func(item) => self.pop().map(|(item, _)| item),
            _ => None,
        }
    }

    /// Returns the next value if it is equal to `expected`.
    ///
    /// This is a convenience method that is equivalent to `next_if(|item| item == expected)`.
    pub fn next_if_eq<U>(&mut self, expected: &U) -> Option<T>
    where
        U: ?Sized,
        T: PartialEq<U>,
    {
        self.next_if(|item| item == expected)
    }

    /// Wraps the tree into a [`Sequence`], so that it can be merged by another tree
    #[inline]
    pub fn into_merged(self) -> MergedSequence<Self> {
        MergedSequence::new(self)
    }

    /// Consumes the tree, collecting the remaining merged values into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use loser_tree::{merge, SliceSequence};
    ///
    /// let tree = merge(
    ///     [SliceSequence::new(&[1, 3]), SliceSequence::new(&[2, 4, 5])],
    ///     u8::MAX,
    /// );
    /// assert_eq!(tree.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[cfg(feature = "vec_storage")]
    pub fn into_vec(mut self) -> Vec<T> {
        let mut res = Vec::new();
        while let Some((item, _)) = self.pop() {
            res.push(item);
        }
        res
    }
}

impl<const STABLE_TIE_BREAKING: bool, S, T, Leaves, Slots, Cmp> Iterator
    for LoserTree<STABLE_TIE_BREAKING, S, T, Leaves, Slots, Cmp>
where
    S: Sequence<Item = T>,
    T: Clone,
    Leaves: Storage<Item = Leaf<S, T>>,
    Slots: Storage<Item = usize>,
    Cmp: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.pop().map(|(item, _)| item)
    }
}

// Exhaustion is terminal, `pop` keeps returning None
impl<const STABLE_TIE_BREAKING: bool, S, T, Leaves, Slots, Cmp> FusedIterator
    for LoserTree<STABLE_TIE_BREAKING, S, T, Leaves, Slots, Cmp>
where
    S: Sequence<Item = T>,
    T: Clone,
    Leaves: Storage<Item = Leaf<S, T>>,
    Slots: Storage<Item = usize>,
    Cmp: Fn(&T, &T) -> Ordering,
{
}
