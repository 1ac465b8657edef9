//! Growable unordered entity storage.
//!
//! Removal is O(1) swap-remove: the last element moves into the freed slot,
//! so element order is never preserved. Callers that iterate by index and
//! remove the current element must re-check the same index instead of
//! advancing past the relocated entity.

/// Append-heavy collection with O(1) unordered removal.
///
/// The logical capacity starts at a per-kind size and doubles whenever an
/// append finds the pool full. Out-of-range removal and a length past
/// capacity are programming errors and abort.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> EntityPool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "entity pool capacity must be positive");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an item, doubling the capacity when full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.capacity *= 2;
            self.items.reserve_exact(self.capacity - self.items.len());
        }
        assert!(
            self.items.len() < self.capacity,
            "entity pool overflow: len {} with capacity {}",
            self.items.len(),
            self.capacity,
        );
        self.items.push(item);
    }

    /// Remove and return the item at `i`, moving the last element into the
    /// freed slot. Order is not preserved.
    pub fn remove(&mut self, i: usize) -> T {
        assert!(
            i < self.items.len(),
            "entity pool removal out of range: index {} with len {}",
            i,
            self.items.len(),
        );
        self.items.swap_remove(i)
    }

    /// Drop every item, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> std::ops::Index<usize> for EntityPool<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.items[i]
    }
}

impl<T> std::ops::IndexMut<usize> for EntityPool<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.items[i]
    }
}

impl<'a, T> IntoIterator for &'a EntityPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut EntityPool<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
