use stackvector::{Array, StackVec};

use super::{SealedToken, Storage};

impl<T, A: Array<Item = T>> Storage for StackVec<A> {
    type Item = T;

    #[inline(always)]
    fn new(_: SealedToken) -> Self {
        Self::new()
    }

    #[inline(always)]
    fn push(&mut self, value: Self::Item, _: SealedToken) {
        Self::push(self, value);
    }

    #[inline(always)]
    fn len(&self, _: SealedToken) -> usize {
        Self::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize, _: SealedToken) -> &Self::Item {
        select! {
            &self[index];
            unsafe { self.get_unchecked(index) }
        }
    }

    #[inline(always)]
    fn get_mut(&mut self, index: usize, _: SealedToken) -> &mut Self::Item {
        select! {
            &mut self[index];
            unsafe { self.get_unchecked_mut(index) }
        }
    }

    #[inline(always)]
    fn reserve_for<I: Iterator>(&mut self, _iter: &I, _: SealedToken) {
        // capacity is fixed
    }
}
