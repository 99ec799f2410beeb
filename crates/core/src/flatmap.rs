//! Small sorted-vector-backed associative container, tuned for the handful
//! of distinct keys (groups, professors) the evaluator ever sees per day.
//! A `HashMap` would outperform a sorted `Vec` at scale, but at N <= a few
//! dozen entries linear insertion into a sorted vector wins on cache
//! behavior and avoids hashing overhead entirely — the same tradeoff the
//! reference evaluator makes with its own `SortedMap`.
//!
//! Every entry insertion charges the shared [`crate::alloc::Arena`] for
//! bookkeeping purposes; see that module's docs for why this is simulated
//! rather than a literal custom-allocator backing.

use crate::alloc::Arena;

/// Sorted `Vec<(K, V)>` with `get_or_insert_with` as its only mutation path.
pub struct SortedFlatMap<'a, K, V> {
    arena: &'a Arena,
    entries: Vec<(K, V)>,
}

impl<'a, K: Ord + Copy, V> SortedFlatMap<'a, K, V> {
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            entries: Vec::new(),
        }
    }

    fn lower_bound(&self, key: &K) -> usize {
        self.entries.partition_point(|(k, _)| k < key)
    }

    /// Returns the existing value for `key`, or inserts `default()` and
    /// returns a reference to that.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let pos = self.lower_bound(&key);
        if pos >= self.entries.len() || self.entries[pos].0 != key {
            self.arena
                .allocate(std::mem::size_of::<(K, V)>(), std::mem::align_of::<(K, V)>());
            self.entries.insert(pos, (key, default()));
        }
        &mut self.entries[pos].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_insert_creates_exactly_once_per_key() {
        let arena = Arena::new(1024);
        let mut map: SortedFlatMap<u32, u32> = SortedFlatMap::new(&arena);
        *map.get_or_insert_with(5, || 0) += 1;
        *map.get_or_insert_with(5, || 0) += 1;
        *map.get_or_insert_with(2, || 0) += 10;

        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![(2, 10), (5, 2)]);
    }
}
