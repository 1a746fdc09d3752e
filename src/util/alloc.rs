use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An item which bumps a shared counter when it is dropped, identified by `id` for hashing,
/// equality and ordering.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub id: u64,
    pub drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(id: u64, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl Hash for CountedDrop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CountedDrop {}

impl PartialOrd for CountedDrop {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CountedDrop {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}
