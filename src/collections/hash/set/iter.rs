use std::hash::{BuildHasher, Hash, RandomState};
use std::iter::{Flatten, FusedIterator};
use std::vec::IntoIter as VecIntoIter;

use super::{Cursor, HashSet};
use super::hash_set::Bucket;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        let buckets = self.buckets.map(<[Bucket<T>]>::into_vec).unwrap_or_default();

        IntoIter {
            inner: buckets.into_iter().flatten(),
            len,
        }
    }
}

/// An owned iterator over the items of a [`HashSet`], in bucket order. See
/// [`HashSet::into_iter`].
pub struct IntoIter<T> {
    pub(crate) inner: Flatten<VecIntoIter<Bucket<T>>>,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        self.len -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let next = self.inner.next_back()?;
        self.len -= 1;
        Some(next)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.begin(),
            back: self.end(),
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the items of a [`HashSet`], in bucket order. See [`HashSet::iter`].
///
/// The iterator is a pair of [`Cursor`]s, starting at [`HashSet::begin`] and [`HashSet::end`],
/// which are moved towards each other until they meet.
pub struct Iter<'a, T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) front: Cursor<'a, T, B>,
    pub(crate) back: Cursor<'a, T, B>,
    pub(crate) len: usize,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Iter<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let next = self.front.current()?;
        self.front.move_next();
        self.len -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: Hash + Eq, B: BuildHasher> DoubleEndedIterator for Iter<'_, T, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back.move_prev();
        self.len -= 1;
        self.back.current()
    }
}

impl<T: Hash + Eq, B: BuildHasher> ExactSizeIterator for Iter<'_, T, B> {}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Iter<'_, T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Clone for Iter<'_, T, B> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}
