use alloc::collections::BTreeMap;
use core::cell::RefCell;
use critical_section::Mutex;
use crate::{Count, Stone};

/// Counts already resolved, keyed by (stone, remaining steps).
///
/// Entries are write-once: the same key always maps to the same count, so a memo only
/// ever grows and never needs invalidation.
pub trait Memo {
    fn get(&self, stone: Stone, steps: usize) -> Option<Count>;

    fn insert(&mut self, stone: Stone, steps: usize, count: Count);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: Memo + ?Sized> Memo for &mut M {
    fn get(&self, stone: Stone, steps: usize) -> Option<Count> {
        (**self).get(stone, steps)
    }

    fn insert(&mut self, stone: Stone, steps: usize, count: Count) {
        (**self).insert(stone, steps, count)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[derive(Debug, Default, Clone)]
pub struct StoneCache {
    counts: BTreeMap<(Stone, usize), Count>,
}

impl StoneCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = ((Stone, usize), Count)>) -> Self {
        Self { counts: entries.into_iter().collect() }
    }

    pub fn iter(&self) -> impl Iterator<Item = ((Stone, usize), Count)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }
}

impl Memo for StoneCache {
    fn get(&self, stone: Stone, steps: usize) -> Option<Count> {
        self.counts.get(&(stone, steps)).copied()
    }

    fn insert(&mut self, stone: Stone, steps: usize, count: Count) {
        let previous = self.counts.insert((stone, steps), count);
        debug_assert!(previous.is_none_or(|p| p == count), "conflicting count for ({stone}, {steps})");
    }

    fn len(&self) -> usize {
        self.counts.len()
    }
}

/// A [`StoneCache`] behind a critical section, shared by counters running on other
/// cores or threads. Lookups and inserts each take the lock once, so two counters may
/// both compute a missing key; they store the same count.
pub struct SharedCache(Mutex<RefCell<StoneCache>>);

impl Default for SharedCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCache {
    pub const fn new() -> Self {
        Self(Mutex::new(RefCell::new(StoneCache { counts: BTreeMap::new() })))
    }

    pub fn snapshot(&self) -> StoneCache {
        critical_section::with(|cs| self.0.borrow_ref(cs).clone())
    }
}

impl Memo for &SharedCache {
    fn get(&self, stone: Stone, steps: usize) -> Option<Count> {
        critical_section::with(|cs| self.0.borrow_ref(cs).get(stone, steps))
    }

    fn insert(&mut self, stone: Stone, steps: usize, count: Count) {
        critical_section::with(|cs| self.0.borrow_ref_mut(cs).insert(stone, steps, count))
    }

    fn len(&self) -> usize {
        critical_section::with(|cs| self.0.borrow_ref(cs).len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stone_cache() {
        let mut cache = StoneCache::new();
        assert!(cache.is_empty());
        cache.insert(0, 3, 2);
        cache.insert(0, 3, 2);
        cache.insert(0, 4, 4);
        assert_eq!(cache.get(0, 3), Some(2));
        assert_eq!(cache.get(0, 5), None);
        assert_eq!(cache.get(1, 3), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_shared_cache() {
        let shared = SharedCache::new();
        let mut memo = &shared;
        memo.insert(17, 2, 2);
        let other = &shared;
        assert_eq!(other.get(17, 2), Some(2));
        assert_eq!(shared.snapshot().iter().collect::<alloc::vec::Vec<_>>(), [((17, 2), 2)]);
    }
}
