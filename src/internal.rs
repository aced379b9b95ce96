//! Internal implementation details of this library.
//!
//! Typically you shouldn't need to touch these types, they only show up in the bounds of
//! [`Tournament`](crate::Tournament) and [`LoserTree`](crate::LoserTree).
//!
//! The tree is implicit. For `k` sequences there are `k` leaf records (one [`Leaf`] per
//! sequence, in insertion order) and `k` slots:
//! ```custom
//! [
//!     winner,
//!     loser of the final match (heap root),
//!     losers of the matches below it, in heap order
//!     ...
//! ]
//! ```
//! Heap position `p` has children `2p` and `2p + 1`. Positions `1..k` are matches, positions
//! `k..2k` are the leaves, leaf `i` sits at position `k + i`.

/// Holds within itself a sequence and the value most recently read from it.
///
/// Once the sequence is exhausted `value` holds a clone of the tree's sentinel and
/// `live` is false, so the replay loop never has to branch on exhaustion.
#[derive(Debug, Clone)]
pub struct Leaf<S, T> {
    pub(crate) value: T,
    pub(crate) seq: S,
    pub(crate) live: bool,
}

impl<S, T> Leaf<S, T> {
    /// Primes `seq` by pulling its first value, falling back to `sentinel` if it's empty
    pub(crate) fn prime(mut seq: S, sentinel: &T) -> Self
    where
        S: crate::Sequence<Item = T>,
        T: Clone,
    {
        let live = seq.advance();
        let value = if live {
            seq.current().clone()
        } else {
            sentinel.clone()
        };
        Self { value, seq, live }
    }

    /// Cached value of the sequence, or the sentinel
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether the sequence still had a value at the last read
    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }
}

/// Heap position of the match that leaf `leaf` plays first in a tree over `k` leaves.
/// Zero when `k == 1`, the only leaf is the winner.
#[inline(always)]
pub(crate) const fn first_match(k: usize, leaf: usize) -> usize {
    (k + leaf) / 2
}
