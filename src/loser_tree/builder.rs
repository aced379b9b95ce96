use core::{cmp::Ordering, marker::PhantomData};

#[cfg(feature = "vec_storage")]
use alloc::vec::Vec;

#[cfg(feature = "stackvec_storage")]
use stackvector::{Array, StackVec};

use super::LoserTree;
use crate::{internal::Leaf, Sequence};

/// A builder for creating a [`LoserTree`].
///
/// The `Tournament` type provides an interface for configuring and creating loser trees.
/// It allows you to specify:
/// - Whether tie-breaking should be stable or arbitrary
/// - Custom comparison functions
/// - Storage backends (heap-allocated `Vec` or stack-allocated arrays)
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "vec_storage")]
/// # {
/// use loser_tree::{SliceSequence, Tournament};
///
/// let tree = Tournament::new(
///     [SliceSequence::new(&[1, 3, 5]), SliceSequence::new(&[2, 4, 6])],
///     u32::MAX,
/// )
/// .arbitrary_tie_breaking() // for better performance
/// .build();
///
/// assert_eq!(tree.into_vec(), vec![1, 2, 3, 4, 5, 6]);
/// # }
/// ```
#[derive(Debug)]
pub struct Tournament<const STABLE_TIE_BREAKING: bool, Cmp, Leaves, Slots, Seqs, T> {
    pub(crate) seqs: Seqs,
    pub(crate) sentinel: T,
    pub(crate) cmp: Cmp,
    pub(crate) _p: PhantomData<(Leaves, Slots)>,
}

impl<Seqs, S> Tournament<true, (), (), (), Seqs, ()>
where
    Seqs: IntoIterator<Item = S>,
    S: Sequence,
{
    /// Creates a new [`Tournament`] over `seqs`.
    ///
    /// This is the entry point for creating a loser tree. By default, it uses:
    /// - Stable tie-breaking (values from lower-indexed sequences win ties)
    /// - Standard ordering comparison `Ord::cmp` (if values implement `Ord`)
    /// - `Vec` storage for the leaves and match slots
    ///
    /// `sentinel` must compare greater than or equal to every value the sequences produce,
    /// it is reported by [`LoserTree::winner`] once all of them are exhausted.
    #[cfg(feature = "vec_storage")]
    #[allow(clippy::type_complexity)]
    pub const fn new(
        seqs: Seqs, sentinel: S::Item,
    ) -> Tournament<true, (), Vec<Leaf<S, S::Item>>, Vec<usize>, Seqs, S::Item> {
        Tournament {
            seqs,
            sentinel,
            cmp: (),
            _p: PhantomData,
        }
    }

    /// Creates a new [`Tournament`] that stores the tree inline with capacity for `N`
    /// sequences.
    ///
    /// See [`new`](Tournament::new) for the details. [Building] the tree panics if `seqs`
    /// yields more than `N` sequences.
    ///
    /// # Examples
    /// ```
    /// use loser_tree::{SliceSequence, Tournament};
    ///
    /// let mut tree = Tournament::new_stackvec::<4>(
    ///     [SliceSequence::new(&[1, 3, 5]), SliceSequence::new(&[2, 4, 6])],
    ///     u8::MAX,
    /// )
    /// .build();
    /// let result: [u8; 6] = core::array::from_fn(|_| tree.next().unwrap());
    ///
    /// assert_eq!(result, [1, 2, 3, 4, 5, 6]);
    /// ```
    ///
    /// [Building]: Tournament::build
    #[cfg(feature = "stackvec_storage")]
    #[allow(clippy::type_complexity)]
    pub const fn new_stackvec<const N: usize>(
        seqs: Seqs, sentinel: S::Item,
    ) -> Tournament<
        true,
        (),
        StackVec<[Leaf<S, S::Item>; N]>,
        StackVec<[usize; N]>,
        Seqs,
        S::Item,
    >
    where
        [Leaf<S, S::Item>; N]: Array<Item = Leaf<S, S::Item>>,
        [usize; N]: Array<Item = usize>,
    {
        Tournament {
            seqs,
            sentinel,
            cmp: (),
            _p: PhantomData,
        }
    }
}

impl<const STABLE_TIE_BREAKING: bool, Cmp, Leaves, Slots, Seqs, T>
    Tournament<STABLE_TIE_BREAKING, Cmp, Leaves, Slots, Seqs, T>
{
    /// Sets a custom comparison function for the tournament.
    ///
    /// The function must define a total order, and the sentinel must be greater than or
    /// equal to every value under it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "vec_storage")]
    /// # {
    /// use loser_tree::{SliceSequence, Tournament};
    ///
    /// let tree = Tournament::new(
    ///     [SliceSequence::new(&[5, 3, 1]), SliceSequence::new(&[6, 4, 2])],
    ///     i32::MIN,
    /// )
    /// .with_cmp(|a: &i32, b: &i32| b.cmp(a)) // largest first
    /// .build();
    /// assert_eq!(tree.into_vec(), vec![6, 5, 4, 3, 2, 1]);
    /// # }
    /// ```
    pub fn with_cmp<F: Fn(&T, &T) -> Ordering>(
        self, cmp: F,
    ) -> Tournament<STABLE_TIE_BREAKING, F, Leaves, Slots, Seqs, T> {
        let Self { seqs, sentinel, .. } = self;
        Tournament {
            seqs,
            sentinel,
            cmp,
            _p: PhantomData,
        }
    }
}

impl<Cmp, Leaves, Slots, Seqs, T> Tournament<true, Cmp, Leaves, Slots, Seqs, T> {
    /// Enables arbitrary tie-breaking.
    ///
    /// A match between equal values is then won by whichever side already holds the
    /// position: the left half during construction, the stored loser during replay.
    /// Output is still sorted, but the relative order of equal values from different
    /// sequences is unspecified.
    pub fn arbitrary_tie_breaking(self) -> Tournament<false, Cmp, Leaves, Slots, Seqs, T> {
        let Self {
            seqs,
            sentinel,
            cmp,
            ..
        } = self;
        Tournament {
            seqs,
            sentinel,
            cmp,
            _p: PhantomData,
        }
    }
}

impl<Cmp, Leaves, Slots, Seqs, T> Tournament<false, Cmp, Leaves, Slots, Seqs, T> {
    /// Enables stable tie-breaking: among equal values the one from the lower-indexed
    /// sequence is yielded first.
    ///
    /// This method is provided just for completeness, since stable tie-breaking is the default.
    pub fn stable_tie_breaking(self) -> Tournament<true, Cmp, Leaves, Slots, Seqs, T> {
        let Self {
            seqs,
            sentinel,
            cmp,
            ..
        } = self;
        Tournament {
            seqs,
            sentinel,
            cmp,
            _p: PhantomData,
        }
    }
}

impl<const STABLE_TIE_BREAKING: bool, Leaves, Slots, Seqs, S, T>
    Tournament<STABLE_TIE_BREAKING, (), Leaves, Slots, Seqs, T>
where
    Seqs: IntoIterator<Item = S>,
    S: Sequence<Item = T>,
    T: Clone + Ord,
    Leaves: crate::storage::Storage<Item = Leaf<S, T>>,
    Slots: crate::storage::Storage<Item = usize>,
{
    /// Builds the tree using the default ordering ([`Ord`]) of the values.
    pub fn build(
        self,
    ) -> LoserTree<STABLE_TIE_BREAKING, S, T, Leaves, Slots, impl Fn(&T, &T) -> Ordering + Copy> {
        let Self { seqs, sentinel, .. } = self;
        Tournament {
            seqs,
            sentinel,
            cmp: <T as Ord>::cmp,
            _p: PhantomData::<(Leaves, Slots)>,
        }
        .build()
    }
}

impl<const STABLE_TIE_BREAKING: bool, Cmp, Leaves, Slots, Seqs, S, T>
    Tournament<STABLE_TIE_BREAKING, Cmp, Leaves, Slots, Seqs, T>
where
    Seqs: IntoIterator<Item = S>,
    S: Sequence<Item = T>,
    T: Clone,
    Leaves: crate::storage::Storage<Item = Leaf<S, T>>,
    Slots: crate::storage::Storage<Item = usize>,
    Cmp: Fn(&T, &T) -> Ordering,
{
    /// Builds the tree using the provided comparison function.
    ///
    /// Pulls the first value of every sequence and plays the initial tournament,
    /// `O(k)` comparisons for `k` sequences.
    pub fn build(self) -> LoserTree<STABLE_TIE_BREAKING, S, T, Leaves, Slots, Cmp> {
        let Self {
            seqs,
            sentinel,
            cmp,
            ..
        } = self;
        LoserTree::new(seqs, sentinel, cmp)
    }
}
