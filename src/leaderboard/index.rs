//! Thread-safe rank index over the span-indexed skip list.

use super::error::LeaderboardError;
use super::skiplist::IndexedSkipList;
use parking_lot::RwLock;
use tracing::trace;

/// A linearizable ordered index: every operation takes effect at the point it holds the
/// internal lock. Rank and range queries acquire shared access and run in parallel;
/// structural mutation acquires exclusive access.
///
/// The index stores elements by value and compares them with `Ord`, so a stored key can
/// never change while it is linked; callers replace an element instead of mutating it
/// in place, and [`replace`](Self::replace) does both halves under one lock acquisition.
#[derive(Debug)]
pub struct RankIndex<T> {
    inner: RwLock<IndexedSkipList<T>>,
}

impl<T: Ord> RankIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(IndexedSkipList::new()),
        }
    }

    /// Insert `value` at its ordered position. The caller guarantees no equal element
    /// is present.
    pub fn insert(&self, value: T) {
        self.inner.write().insert(value);
    }

    /// Remove the element equal to `value`, reporting whether it was present.
    pub fn remove(&self, value: &T) -> bool {
        self.inner.write().remove(value)
    }

    /// Atomically remove `old` (when given) and insert `new` (when given) under a
    /// single exclusive acquisition, so no reader can observe the index between the
    /// two halves. Returns whether an element was removed.
    pub fn replace(&self, old: Option<&T>, new: Option<T>) -> bool {
        if old.is_none() && new.is_none() {
            return false;
        }
        let mut list = self.inner.write();
        let removed = match old {
            Some(value) => list.remove(value),
            None => false,
        };
        if let Some(value) = new {
            list.insert(value);
        }
        removed
    }

    /// 1-based rank of the element equal to `value`, or `None` if absent.
    pub fn rank(&self, value: &T) -> Option<usize> {
        self.inner.read().rank(value)
    }

    /// True if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().contains(value)
    }

    /// Number of elements in the index.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True if the index holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Remove every element.
    pub fn clear(&self) {
        trace!("Clearing rank index");
        self.inner.write().clear();
    }
}

impl<T: Ord + Clone> RankIndex<T> {
    /// Up to `count` elements starting at 0-based position `start`, in order. The whole
    /// window is collected under one shared acquisition and therefore reflects a single
    /// consistent snapshot.
    pub fn range(&self, start: usize, count: usize) -> Vec<T> {
        self.inner.read().range(start, count)
    }

    /// Every element in order, as one consistent snapshot.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read().iter().cloned().collect()
    }

    /// Copy the full contents, in order, into the front of `dst`.
    ///
    /// Fails without writing anything when `dst` is shorter than the index.
    pub fn copy_to(&self, dst: &mut [T]) -> Result<usize, LeaderboardError> {
        let list = self.inner.read();
        let required = list.len();
        if dst.len() < required {
            return Err(LeaderboardError::DestinationTooSmall {
                required,
                capacity: dst.len(),
            });
        }
        for (slot, value) in dst.iter_mut().zip(list.iter()) {
            *slot = value.clone();
        }
        Ok(required)
    }
}

impl<T: Ord> Default for RankIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
