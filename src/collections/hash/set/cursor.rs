use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ptr;

use super::HashSet;

/// A type for bi-directional traversal of every item in a [`HashSet`], bucket by bucket. See
/// [`HashSet::begin`] and [`HashSet::end`] to create one.
///
/// A Cursor is a pair of indices, the bucket and the position within that bucket, along with a
/// shared borrow of the set. Because of that borrow, the set can't be modified while a Cursor is
/// alive, so a Cursor can't outlive the layout it was created for.
///
/// Cursors are only ever left in one of two kinds of position: on an item, or at the end of the
/// last bucket. Moving never stops at the end of any other bucket.
pub struct Cursor<'a, T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) set: &'a HashSet<T, B>,
    pub(crate) bucket: usize,
    pub(crate) pos: usize,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Cursor<'a, T, B> {
    /// Creates a Cursor pointing at the first item of the first non-empty bucket, or at the end if
    /// there are no items.
    pub(crate) fn front(set: &'a HashSet<T, B>) -> Cursor<'a, T, B> {
        let mut cursor = Cursor {
            set,
            bucket: 0,
            pos: 0,
        };
        cursor.skip_exhausted();
        cursor
    }

    /// Creates a Cursor pointing past the last item of the last bucket. An unallocated set has no
    /// buckets, in which case front and back are both at `(0, 0)`.
    pub(crate) fn back(set: &'a HashSet<T, B>) -> Cursor<'a, T, B> {
        let buckets = set.buckets();

        match buckets.last() {
            Some(last) => Cursor {
                set,
                bucket: buckets.len() - 1,
                pos: last.len(),
            },
            None => Cursor {
                set,
                bucket: 0,
                pos: 0,
            },
        }
    }

    /// While the position is past the end of the current bucket and there is a following bucket,
    /// move to the start of the following bucket.
    fn skip_exhausted(&mut self) {
        let buckets = self.set.buckets();

        while self.bucket + 1 < buckets.len() && self.pos >= buckets[self.bucket].len() {
            self.bucket += 1;
            self.pos = 0;
        }
    }

    /// Returns the set that this Cursor traverses.
    pub const fn set(&self) -> &'a HashSet<T, B> {
        self.set
    }

    /// Returns the index of the bucket the Cursor is currently in.
    pub const fn bucket_index(&self) -> usize {
        self.bucket
    }

    /// Returns the Cursor's position within its current bucket.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the item the Cursor points at, or None if it is at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.set.buckets().get(self.bucket)?.get(self.pos)
    }

    /// Returns true if the Cursor is past the last item. On an empty set, this is true for every
    /// Cursor.
    pub fn is_end(&self) -> bool {
        self.current().is_none()
    }

    /// Returns true if the Cursor is equal to [`HashSet::begin`].
    pub fn is_begin(&self) -> bool {
        *self == Cursor::front(self.set)
    }

    /// Moves the Cursor to the next item, or to the end if there are no more items. A Cursor which
    /// is already at the end doesn't move.
    pub fn move_next(&mut self) -> &mut Self {
        if !self.is_end() {
            self.pos += 1;
            self.skip_exhausted();
        }
        self
    }

    /// Moves the Cursor to the previous item, skipping over empty buckets. A Cursor which is
    /// already on the first item (or on an empty set) doesn't move.
    pub fn move_prev(&mut self) -> &mut Self {
        let buckets = self.set.buckets();
        let (mut bucket, mut pos) = (self.bucket, self.pos);

        while pos == 0 && bucket > 0 {
            bucket -= 1;
            pos = buckets[bucket].len();
        }

        // If pos is still 0, everything before the Cursor was empty.
        if pos > 0 {
            self.bucket = bucket;
            self.pos = pos - 1;
        }
        self
    }

    /// Returns the item following the current one without moving the Cursor.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut next = *self;
        if next.is_end() {
            return None;
        }
        next.move_next().current()
    }

    /// Returns the item preceding the current one without moving the Cursor.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut prev = *self;
        let before = (prev.bucket, prev.pos);
        prev.move_prev();

        if (prev.bucket, prev.pos) == before {
            None
        } else {
            prev.current()
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Clone for Cursor<'_, T, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Hash + Eq, B: BuildHasher> Copy for Cursor<'_, T, B> {}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Cursor<'_, T, B> {
    /// Cursors are equal if they traverse the same set and share both indices.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.set, other.set) && self.bucket == other.bucket && self.pos == other.pos
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Cursor<'_, T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Cursor<'_, T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("bucket", &self.bucket)
            .field("pos", &self.pos)
            .field("current", &self.current())
            .finish()
    }
}
