//! Fixed-capacity entity pools
//!
//! Each slot is either live (`Some`) or free (`None`). Allocation is first-fit:
//! the lowest free index is reused, so a slot index only identifies an entity
//! until that slot is freed.

/// Fixed-capacity slot array with first-fit allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Pool<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Place `value` in the first free slot. Returns `None` (and drops the
    /// value) when the pool is full.
    pub fn spawn(&mut self, value: T) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(value);
        Some(index)
    }

    /// Free a slot. Freeing an already-free slot is a no-op.
    pub fn despawn(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Live entities with their slot index, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|v| (i, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|v| (i, v)))
    }

    /// Keep only entities for which `keep` returns true, visiting in slot order
    pub fn retain(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        for slot in &mut self.slots {
            if let Some(value) = slot {
                if !keep(value) {
                    *slot = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fit_reuses_lowest_free_slot() {
        let mut pool: Pool<u32, 3> = Pool::new();
        assert_eq!(pool.spawn(10), Some(0));
        assert_eq!(pool.spawn(11), Some(1));
        assert_eq!(pool.spawn(12), Some(2));
        pool.despawn(1);
        pool.despawn(0);
        // First-fit, not FIFO: slot 0 comes back before slot 1
        assert_eq!(pool.spawn(20), Some(0));
        assert_eq!(pool.spawn(21), Some(1));
    }

    #[test]
    fn test_full_pool_drops_spawn() {
        let mut pool: Pool<u32, 2> = Pool::new();
        pool.spawn(1);
        pool.spawn(2);
        assert!(pool.is_full());
        assert_eq!(pool.spawn(3), None);
        assert_eq!(pool.live_count(), 2);
        assert_eq!(pool.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_retain_and_clear() {
        let mut pool: Pool<i32, 4> = Pool::new();
        for v in [1, 2, 3, 4] {
            pool.spawn(v);
        }
        pool.retain(|v| *v % 2 == 0);
        assert_eq!(pool.live_count(), 2);
        assert!(pool.get(0).is_none());
        assert_eq!(pool.get(1), Some(&2));
        pool.clear();
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.despawn(3), None);
    }
}
