//! Backing stores for the leaf records and loser slots of a
//! [`LoserTree`](crate::LoserTree).
//!
//! A tree over `k` sequences needs two arrays of length `k`: one [`Leaf`](crate::internal::Leaf)
//! per sequence and one slot index per tree position. Both are filled once during construction
//! and only indexed afterwards, so any growable contiguous container fits.
#[cfg(not(any(feature = "vec_storage", feature = "stackvec_storage")))]
compile_error!(
    "At least one storage feature must be enabled ('vec_storage' or 'stackvec_storage')"
);

mod private {
    pub struct SealedToken;
}

pub(crate) use private::SealedToken;

/// Fixed-after-construction array used by the tree.
///
/// Every method takes a [`SealedToken`], which only this crate can create. That keeps
/// [`get`](Storage::get) and [`get_mut`](Storage::get_mut) uncallable from outside: release
/// builds skip their bounds checks unless the `forbid_unsafe` feature is enabled.
///
/// Public only because it appears in the bounds of [`LoserTree`](crate::LoserTree).
///
/// # SAFETY
/// Callers only pass indices below [`len`](Storage::len).
///
/// Implementations must behave like a plain contiguous array: `push` appends exactly one
/// element, `len` counts them and `get`/`get_mut` address them by position.
#[doc(hidden)]
pub trait Storage: Sized {
    type Item;
    fn new(_: SealedToken) -> Self;
    fn push(&mut self, value: Self::Item, _: SealedToken);
    fn len(&self, _: SealedToken) -> usize;
    fn get(&self, index: usize, _: SealedToken) -> &Self::Item;
    fn get_mut(&mut self, index: usize, _: SealedToken) -> &mut Self::Item;
    /// Takes the iterator by reference so that fixed-capacity stores never have to
    /// look at its `size_hint`
    fn reserve_for<I: Iterator>(&mut self, iter: &I, _: SealedToken);

    /// Creates a store holding every item of `iter`, in order
    #[inline]
    fn from_items<I: Iterator<Item = Self::Item>>(iter: I, _: SealedToken) -> Self {
        let mut store = Self::new(SealedToken);
        store.reserve_for(&iter, SealedToken);
        for item in iter {
            store.push(item, SealedToken);
        }
        store
    }
}

/// Picks the bounds-checked or the unchecked access depending on the build
macro_rules! select {
    ($safe:expr; unsafe { $unsafe:expr }) => {
        #[cfg(any(debug_assertions, feature = "forbid_unsafe", test))]
        {
            $safe
        }
        #[cfg(not(any(debug_assertions, feature = "forbid_unsafe", test)))]
        unsafe {
            $unsafe
        }
    };
}

#[cfg(feature = "vec_storage")]
mod vec;

#[cfg(feature = "stackvec_storage")]
mod stackvec;
