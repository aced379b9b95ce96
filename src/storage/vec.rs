use alloc::vec::Vec;

use super::{SealedToken, Storage};

impl<T> Storage for Vec<T> {
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
    fn reserve_for<I: Iterator>(&mut self, iter: &I, _: SealedToken) {
        Self::reserve(self, iter.size_hint().0);
    }
}
