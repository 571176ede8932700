//! Common traits for the indexed heap
//!
//! This module provides the error type shared by heap operations and the
//! [`PositionMap`] trait, the seam between [`IndexedMinHeap`] and the table
//! that keeps each resident id synchronised with its array slot.
//!
//! Two realisations are provided:
//!
//! - Any [`HashMap<I, usize, S>`](std::collections::HashMap), in particular
//!   [`FxHashMap`](rustc_hash::FxHashMap), which is the default for
//!   [`IndexedMinHeap`]. Works for every hashable id.
//! - [`DensePositions`](crate::position::DensePositions), a plain vector
//!   indexed by the id itself. Suited to small contiguous integer ids such as
//!   vertex numbers.
//!
//! [`IndexedMinHeap`]: crate::indexed_heap::IndexedMinHeap

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `extract_min` was called on a heap with no elements
    EmptyHeap,
    /// The id is already resident in the heap
    DuplicateId,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => {
                write!(f, "cannot extract the minimum of an empty heap")
            }
            HeapError::DuplicateId => {
                write!(f, "an element with this id is already in the heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Maps element ids to their current index in the heap array.
///
/// The heap is the only writer: it calls [`set`](PositionMap::set) whenever an
/// element lands in a new slot and [`remove`](PositionMap::remove) when an
/// element leaves. Implementations only need to store what they are told.
pub trait PositionMap<I> {
    /// Returns the recorded index of `id`, if it is resident.
    fn position(&self, id: &I) -> Option<usize>;

    /// Records that `id` now lives at `index`, replacing any previous entry.
    fn set(&mut self, id: I, index: usize);

    /// Forgets `id`, returning the index it was recorded at.
    fn remove(&mut self, id: &I) -> Option<usize>;

    /// Forgets every id.
    fn clear(&mut self);

    /// Number of ids currently recorded.
    fn len(&self) -> usize;

    /// Returns true if no id is recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I, S> PositionMap<I> for HashMap<I, usize, S>
where
    I: Eq + Hash,
    S: BuildHasher,
{
    fn position(&self, id: &I) -> Option<usize> {
        self.get(id).copied()
    }

    fn set(&mut self, id: I, index: usize) {
        self.insert(id, index);
    }

    fn remove(&mut self, id: &I) -> Option<usize> {
        HashMap::remove(self, id)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_hash_positions_roundtrip() {
        let mut map: FxHashMap<&str, usize> = FxHashMap::default();
        assert!(PositionMap::is_empty(&map));

        map.set("a", 0);
        map.set("b", 3);
        assert_eq!(map.position(&"a"), Some(0));
        assert_eq!(map.position(&"b"), Some(3));
        assert_eq!(PositionMap::len(&map), 2);

        map.set("a", 7);
        assert_eq!(map.position(&"a"), Some(7));
        assert_eq!(PositionMap::len(&map), 2);

        assert_eq!(PositionMap::remove(&mut map, &"b"), Some(3));
        assert_eq!(map.position(&"b"), None);
        assert_eq!(PositionMap::remove(&mut map, &"b"), None);

        PositionMap::clear(&mut map);
        assert!(PositionMap::is_empty(&map));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HeapError::EmptyHeap.to_string(),
            "cannot extract the minimum of an empty heap"
        );
        assert_eq!(
            HeapError::DuplicateId.to_string(),
            "an element with this id is already in the heap"
        );
    }
}
