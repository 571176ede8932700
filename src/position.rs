//! Dense position map for small integer ids
//!
//! When ids are small contiguous integers (vertex numbers, slot indices) the
//! id itself can index a vector, which avoids hashing on every sift step and
//! keeps the table compact.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_mst::indexed_heap::{HeapElement, IndexedMinHeap};
//! use indexed_heap_mst::position::DensePositions;
//!
//! let mut heap = IndexedMinHeap::with_positions(DensePositions::with_bound(8));
//! heap.insert(HeapElement::new(4, 3usize, "c")).unwrap();
//! heap.insert(HeapElement::new(1, 5usize, "e")).unwrap();
//! assert_eq!(heap.peek().map(|e| e.id), Some(5));
//! ```

use crate::traits::PositionMap;
use std::marker::PhantomData;

/// Ids that can address a slot in a vector directly.
pub trait DenseId: Copy {
    /// The slot this id occupies.
    fn index(self) -> usize;
}

macro_rules! impl_dense_id {
    ($($t:ty),*) => {
        $(
            impl DenseId for $t {
                #[inline]
                fn index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_dense_id!(u8, u16, u32, usize);

/// A [`PositionMap`] backed by a vector indexed by id.
///
/// The table grows on demand, so the bound given to
/// [`with_bound`](DensePositions::with_bound) is a capacity hint, not a limit.
#[derive(Debug, Clone)]
pub struct DensePositions<I> {
    slots: Vec<Option<usize>>,
    len: usize,
    _id: PhantomData<I>,
}

impl<I> DensePositions<I> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::with_bound(0)
    }

    /// Creates an empty table with room for ids in `0..bound`.
    pub fn with_bound(bound: usize) -> Self {
        DensePositions {
            slots: vec![None; bound],
            len: 0,
            _id: PhantomData,
        }
    }

    /// One past the largest id the table can hold without growing.
    pub fn bound(&self) -> usize {
        self.slots.len()
    }
}

impl<I> Default for DensePositions<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: DenseId> PositionMap<I> for DensePositions<I> {
    fn position(&self, id: &I) -> Option<usize> {
        self.slots.get(id.index()).copied().flatten()
    }

    fn set(&mut self, id: I, index: usize) {
        let slot = id.index();
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        if self.slots[slot].replace(index).is_none() {
            self.len += 1;
        }
    }

    fn remove(&mut self, id: &I) -> Option<usize> {
        let removed = self.slots.get_mut(id.index())?.take();
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut positions: DensePositions<usize> = DensePositions::with_bound(4);
        assert_eq!(positions.bound(), 4);
        assert!(positions.is_empty());

        positions.set(2, 0);
        positions.set(0, 1);
        assert_eq!(positions.len(), 2);
        assert_eq!(positions.position(&2), Some(0));
        assert_eq!(positions.position(&1), None);

        // overwriting does not change the count
        positions.set(2, 5);
        assert_eq!(positions.len(), 2);
        assert_eq!(positions.position(&2), Some(5));

        assert_eq!(positions.remove(&2), Some(5));
        assert_eq!(positions.remove(&2), None);
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn test_grows_past_bound() {
        let mut positions: DensePositions<u32> = DensePositions::new();
        positions.set(10, 3);
        assert!(positions.bound() >= 11);
        assert_eq!(positions.position(&10), Some(3));
        assert_eq!(positions.position(&100), None);
        assert_eq!(positions.remove(&100), None);
    }

    #[test]
    fn test_clear() {
        let mut positions: DensePositions<u16> = DensePositions::with_bound(3);
        positions.set(0, 0);
        positions.set(1, 1);
        positions.clear();
        assert!(positions.is_empty());
        assert_eq!(positions.position(&0), None);
        assert_eq!(positions.bound(), 3);
    }
}
