//! The input side of a merge.
//!
//! A [`Sequence`] is a finite, non-restartable producer of values in non-decreasing order.
//! The [`LoserTree`](crate::LoserTree) only ever calls [`advance`](Sequence::advance) and
//! [`current`](Sequence::current) on it, caching a clone of each value it reads.
//!
//! Two adapters are provided: [`SliceSequence`] over a borrowed sorted slice (with
//! [`seek`](SliceSequence::seek) for callers that want to skip ahead), and [`IterSequence`]
//! over any [`Iterator`].

/// Pull-based producer of sorted values.
///
/// Values returned by successive successful calls to [`advance`](Sequence::advance) must be
/// non-decreasing according to the order the consuming tree was built with. Breaking that
/// contract produces unsorted output but never undefined behavior.
pub trait Sequence {
    /// Type of the produced values
    type Item;

    /// Moves to the next value. Returns `false` once the sequence is exhausted; after that
    /// the sequence is considered permanently exhausted.
    fn advance(&mut self) -> bool;

    /// The value the last successful [`advance`](Sequence::advance) moved to.
    ///
    /// Calling this before the first successful `advance` or after exhaustion is a contract
    /// violation; implementations may panic.
    fn current(&self) -> &Self::Item;
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        S::advance(self)
    }

    #[inline]
    fn current(&self) -> &Self::Item {
        S::current(self)
    }
}

/// A [`Sequence`] over a sorted slice.
///
/// # Examples
///
/// ```
/// use loser_tree::{Sequence, SliceSequence};
///
/// let mut seq = SliceSequence::new(&[1, 3, 5, 7]);
/// assert!(seq.advance());
/// assert_eq!(seq.current(), &1);
/// assert!(seq.seek(&4));
/// assert_eq!(seq.current(), &5);
/// assert!(!seq.seek(&8));
/// assert!(!seq.advance());
/// ```
#[derive(Debug, Clone)]
pub struct SliceSequence<'a, T> {
    items: &'a [T],
    /// Number of items moved past; the current item is `items[pos - 1]`.
    /// `items.len() + 1` once the sequence is exhausted.
    pos: usize,
}

impl<'a, T> SliceSequence<'a, T> {
    /// Creates a sequence positioned before the first element of `items`
    #[inline]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// Items that were not yet reached by [`advance`](Sequence::advance)
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        self.items.get(self.pos..).unwrap_or_default()
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.pos > self.items.len()
    }

    /// Positions the sequence on the first element that is not less than `target`.
    ///
    /// Never moves backwards: if the current element already satisfies the condition
    /// the sequence is left in place. Returns `false` (leaving the sequence exhausted)
    /// if no such element exists or the sequence was already exhausted.
    pub fn seek(&mut self, target: &T) -> bool
    where
        T: Ord,
    {
        if self.is_exhausted() {
            return false;
        }
        if self.pos > 0 && self.items[self.pos - 1] >= *target {
            return true;
        }
        let skip = self.remaining().partition_point(|item| item < target);
        if self.pos + skip < self.items.len() {
            self.pos += skip + 1;
            true
        } else {
            self.pos = self.items.len() + 1;
            false
        }
    }
}

impl<'a, T> From<&'a [T]> for SliceSequence<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<T> Sequence for SliceSequence<'_, T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> bool {
        if self.pos < self.items.len() {
            self.pos += 1;
            true
        } else {
            self.pos = self.items.len() + 1;
            false
        }
    }

    /// # Panics
    /// If called before the first successful [`advance`](Sequence::advance) or after
    /// exhaustion
    #[inline]
    fn current(&self) -> &T {
        &self.items[self.pos.wrapping_sub(1)]
    }
}

/// A [`Sequence`] that pulls values from an [`Iterator`].
///
/// # Examples
///
/// ```
/// use loser_tree::{IterSequence, Sequence};
///
/// let mut seq = IterSequence::new((0..3).map(|x| x * 10));
/// assert!(seq.advance());
/// assert_eq!(seq.current(), &0);
/// assert!(seq.advance());
/// assert_eq!(seq.current(), &10);
/// ```
#[derive(Debug, Clone)]
pub struct IterSequence<I: Iterator> {
    iter: I,
    item: Option<I::Item>,
}

impl<I: Iterator> IterSequence<I> {
    /// Wraps `iter`; nothing is pulled until the first [`advance`](Sequence::advance)
    #[inline]
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            item: None,
        }
    }

    /// Returns the wrapped iterator together with the last pulled item
    #[inline]
    pub fn into_parts(self) -> (Option<I::Item>, I) {
        (self.item, self.iter)
    }
}

impl<I: Iterator> Sequence for IterSequence<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        self.item = self.iter.next();
        self.item.is_some()
    }

    /// # Panics
    /// If called before the first successful [`advance`](Sequence::advance) or after
    /// exhaustion
    #[inline]
    fn current(&self) -> &I::Item {
        match &self.item {
            Some(item) => item,
            None => panic!("IterSequence::current called without a current item"),
        }
    }
}
