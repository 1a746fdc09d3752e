use std::hash::{BuildHasher, Hash, Hasher};

/// An item which hashes and compares by `key` alone, carrying a `payload` which doesn't take part
/// in either. Two Keyed items with the same key are equal, even if their payloads differ.
#[derive(Debug, Clone)]
pub struct Keyed<V> {
    pub key: u64,
    pub payload: V,
}

impl<V> Keyed<V> {
    pub const fn new(key: u64, payload: V) -> Keyed<V> {
        Keyed { key, payload }
    }
}

impl<V> Hash for Keyed<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<V> PartialEq for Keyed<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V> Eq for Keyed<V> {}

/// A Hasher which hashes any single integer to itself, so that an item's bucket is simply
/// `value % num_buckets`. Arbitrary bytes are folded in little-endian order.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }

    fn write_usize(&mut self, value: usize) {
        self.state = value as u64;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityState;

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
