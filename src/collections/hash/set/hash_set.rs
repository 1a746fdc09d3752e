use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter;
use std::ops::{BitAnd, BitOr, BitXor, Index, Sub};

use super::{Cursor, Iter};
use crate::collections::traits::Set;
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// The number of buckets allocated when a set created without a bucket count is first written to.
pub const DEFAULT_BUCKETS: usize = 64;

/// A set of unique items which relies on the items implementing [`Hash`] and [`Eq`].
///
/// Items are stored in a fixed number of buckets, each of which is an independent, growable
/// sequence. An item always lives in bucket `hash(item) % num_buckets`, where the hash is produced
/// by the set's [`BuildHasher`]. Items which land in the same bucket are chained one after the
/// other, so the set never needs to probe for a free slot and never rehashes. Choosing a bucket
/// count which suits the expected number of items is the caller's job.
///
/// The bucket array itself isn't allocated until the first item is written (see
/// [`insert`](HashSet::insert) and [`update`](HashSet::update)). Until then, and after
/// [`reset`](HashSet::reset), the set is valid and reads as empty.
///
/// It is a logic error for an item to be modified in a way that changes its hash while it is in
/// the set. Because of this, the set never hands out mutable references to its items.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `b`: The number of buckets.
/// - `c`: The number of items in the bucket in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(c)`, `O(b)`* |
/// | `contains` | `O(c)` |
/// | `get` / `query` | `O(c)` |
/// | `update` | `O(c)`, `O(b)`* |
/// | `remove` / `take` | `O(c)` |
/// | `len` | `O(b)` |
/// | `is_empty` | `O(b)` |
/// | `clear` | `O(b + n)` |
///
/// \* The first write to an unallocated set allocates all `b` buckets.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) buckets: Option<Box<[Bucket<T>]>>,
    pub(crate) bucket_count: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<T> = Vec<T>;

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet without a bucket count, using the default value for `B`. Nothing is
    /// allocated until the first write, at which point [`DEFAULT_BUCKETS`] buckets are created.
    pub fn new() -> HashSet<T, B> {
        HashSet::with_hasher(B::default())
    }

    /// Creates a new HashSet which will use exactly `buckets` buckets once it is written to. A
    /// count of 0 behaves the same as [`HashSet::new`].
    pub fn with_buckets(buckets: usize) -> HashSet<T, B> {
        HashSet::with_buckets_and_hasher(buckets, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet without a bucket count, using the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet::with_buckets_and_hasher(0, hasher)
    }

    /// Creates a new HashSet with the provided bucket count and `hasher`. Memory is still only
    /// allocated by the first write.
    pub const fn with_buckets_and_hasher(buckets: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            buckets: None,
            bucket_count: buckets,
            hasher,
        }
    }

    /// Returns the number of items in the set. This sums the length of every bucket.
    pub fn len(&self) -> usize {
        self.buckets().iter().map(Vec::len).sum()
    }

    /// Returns true if no bucket holds an item, including when the buckets haven't been allocated.
    pub fn is_empty(&self) -> bool {
        self.buckets().iter().all(Vec::is_empty)
    }

    /// Returns the configured number of buckets. This is 0 for a set which was created without a
    /// count and hasn't been written to yet.
    pub const fn num_buckets(&self) -> usize {
        self.bucket_count
    }

    /// Returns true if the bucket array has been allocated.
    pub const fn is_allocated(&self) -> bool {
        self.buckets.is_some()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns the contents of the bucket at `index`, or None if the set doesn't have that many
    /// buckets. Buckets of an unallocated set read as empty.
    pub fn bucket(&self, index: usize) -> Option<&[T]> {
        if index >= self.bucket_count {
            return None;
        }

        match self.buckets().get(index) {
            Some(bucket) => Some(bucket.as_slice()),
            None => Some(Default::default()),
        }
    }

    /// Inserts `item` into the set if there isn't already an equal item, returning true if it was
    /// inserted. If an equal item is already present, the set is left unchanged and `item` is
    /// dropped.
    pub fn insert(&mut self, item: T) -> bool {
        let bucket = self.bucket_mut_for(&item);

        if bucket.contains(&item) {
            return false;
        }

        bucket.push(item);
        true
    }

    /// Returns true if the set contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Returns a reference to the stored item which is equal to `item`, if there is one.
    ///
    /// This is useful for items which are equal by some key but carry additional data.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(item)?;

        self.buckets()[index]
            .iter()
            .find(|stored| Borrow::<Q>::borrow(*stored) == item)
    }

    /// Looks up the stored item equal to `item`. If one is found, `item` is overwritten with a
    /// clone of the *stored* item and true is returned. Otherwise `item` is left as it was.
    pub fn query(&self, item: &mut T) -> bool
    where
        T: Clone,
    {
        match self.get(&*item) {
            Some(stored) => {
                item.clone_from(stored);
                true
            },
            None => false,
        }
    }

    /// Replaces the stored item equal to `item` with `item`, returning true. If there is no equal
    /// item, `item` is inserted as a new entry and false is returned.
    pub fn update(&mut self, item: T) -> bool {
        let bucket = self.bucket_mut_for(&item);

        match bucket.iter().position(|stored| *stored == item) {
            Some(pos) => {
                bucket[pos] = item;
                true
            },
            None => {
                bucket.push(item);
                false
            },
        }
    }

    /// Removes the item equal to `item`, returning true if anything was removed.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes the item equal to `item` and returns it, if there is one.
    ///
    /// The last item of the bucket is moved into the vacated position, so the order within a
    /// bucket isn't preserved.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(item)?;
        let bucket = &mut self.buckets.as_deref_mut()?[index];

        let pos = bucket
            .iter()
            .position(|stored| Borrow::<Q>::borrow(stored) == item)?;

        Some(bucket.swap_remove(pos))
    }

    /// Removes all items from the set, keeping the bucket array allocated.
    pub fn clear(&mut self) {
        if let Some(buckets) = &mut self.buckets {
            buckets.iter_mut().for_each(Vec::clear);
        }
    }

    /// Drops all items along with the bucket array and forgets the bucket count. The next write
    /// will allocate [`DEFAULT_BUCKETS`] buckets.
    pub fn reset(&mut self) {
        log::trace!("resetting HashSet with {} buckets", self.bucket_count);
        self.buckets = None;
        self.bucket_count = 0;
    }

    /// Drops all items and allocates `buckets` empty buckets straight away. A count of 0 is the
    /// same as calling [`reset`](HashSet::reset).
    pub fn reset_with_buckets(&mut self, buckets: usize) {
        self.reset();

        if buckets != 0 {
            self.bucket_count = buckets;
            self.buckets = Some(alloc_buckets(buckets));
        }
    }

    /// Returns a [`Cursor`] pointing to the first item in the set, or equal to
    /// [`end`](HashSet::end) if the set is empty.
    pub fn begin(&self) -> Cursor<'_, T, B> {
        Cursor::front(self)
    }

    /// Returns a [`Cursor`] pointing just past the last item of the last bucket.
    pub fn end(&self) -> Cursor<'_, T, B> {
        Cursor::back(self)
    }

    /// Returns an iterator over all items in the set, as references, walking the buckets in order.
    pub fn iter(&self) -> Iter<'_, T, B> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// The allocated buckets, or an empty slice if nothing has been allocated yet.
    pub(crate) fn buckets(&self) -> &[Bucket<T>] {
        self.buckets.as_deref().unwrap_or_default()
    }

    /// Returns the bucket array, allocating it first if required. The returned slice is never
    /// empty.
    pub(crate) fn storage_mut(&mut self) -> &mut [Bucket<T>] {
        if self.bucket_count == 0 {
            self.bucket_count = DEFAULT_BUCKETS;
        }

        let count = self.bucket_count;
        self.buckets.get_or_insert_with(|| alloc_buckets(count))
    }

    /// Calculates the index of the bucket that `hashable` belongs in, or None if no buckets are
    /// allocated.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let hash = self.hasher.hash_one(hashable);
        hash.checked_rem(self.buckets().len() as u64).map(|i| i as usize)
    }

    /// Returns the bucket that `item` belongs in, allocating the bucket array if required.
    pub(crate) fn bucket_mut_for(&mut self, item: &T) -> &mut Bucket<T> {
        let hash = self.hasher.hash_one(item);
        let buckets = self.storage_mut();
        // storage_mut never returns an empty slice.
        let index = (hash % buckets.len() as u64) as usize;
        &mut buckets[index]
    }
}

fn alloc_buckets<T>(count: usize) -> Box<[Bucket<T>]> {
    log::trace!("allocating {count} buckets for HashSet");
    iter::repeat_with(Vec::new).take(count).collect()
}

impl<T: Hash + Eq, B: BuildHasher> Index<usize> for HashSet<T, B> {
    type Output = [T];

    /// Returns the contents of the bucket at `index`.
    ///
    /// # Panics
    /// Panics if `index` isn't less than [`num_buckets`](HashSet::num_buckets).
    fn index(&self, index: usize) -> &Self::Output {
        self.bucket(index)
            .ok_or(IndexOutOfBounds {
                index,
                len: self.bucket_count,
            })
            .throw()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            buckets: self.buckets.clone(),
            bucket_count: self.bucket_count,
            hasher: self.hasher.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    /// Two sets are equal if they hold equal items, regardless of how those items are bucketed.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::new();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T, B> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.collect_with_buckets(self.union(rhs))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.collect_with_buckets(self.intersection(rhs))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.collect_with_buckets(self.symmetric_difference(rhs))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.collect_with_buckets(self.difference(rhs))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> HashSet<T, B> {
    /// Clones the items produced by `items` into a new set with the same bucket count as self.
    fn collect_with_buckets<'a>(&self, items: impl Iterator<Item = &'a T>) -> HashSet<T, B>
    where
        T: 'a,
    {
        let mut set = HashSet::with_buckets(self.bucket_count);
        set.extend(items.cloned());
        set
    }
}

struct DebugBuckets<'a, T>(&'a [Bucket<T>]);

const EMPTY_BUCKET: DebugRaw = DebugRaw("-");

impl<T: Debug> Debug for DebugBuckets<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(debug_bucket)).finish()
    }
}

fn debug_bucket<T: Debug>(bucket: &Bucket<T>) -> &dyn Debug {
    if bucket.is_empty() {
        &EMPTY_BUCKET
    } else {
        bucket
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("buckets", &DebugBuckets(self.buckets()))
            .field("len", &self.len())
            .field("num_buckets", &self.bucket_count)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
