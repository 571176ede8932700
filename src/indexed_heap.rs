//! Indexed binary min-heap
//!
//! A binary min-heap laid out in a vector, paired with a [`PositionMap`] that
//! records where every element currently lives. The map turns lookup by id
//! into an O(1) operation and lets any element be removed in O(log n), which
//! is what Prim's algorithm needs to emulate `decrease_key`.
//!
//! Each element is a `(key, id, payload)` triple. Ordering uses the key only;
//! ids must be unique among resident elements and the payload is carried
//! along untouched.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `delete`      | O(log n)   |
//! | `get`         | O(1)       |
//! | `peek`        | O(1)       |
//! | `heapify`     | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_mst::indexed_heap::{HeapElement, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(HeapElement::new(3, 'c', "three")).unwrap();
//! heap.insert(HeapElement::new(1, 'a', "one")).unwrap();
//! heap.insert(HeapElement::new(2, 'b', "two")).unwrap();
//!
//! assert_eq!(heap.get(&'b').map(|e| e.payload), Some("two"));
//! assert_eq!(heap.delete(&'a').map(|e| e.key), Some(1));
//! assert_eq!(heap.extract_min().map(|e| e.id), Ok('b'));
//! ```

use crate::traits::{HeapError, PositionMap};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A `(key, id, payload)` triple stored in an [`IndexedMinHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapElement<K, I, T> {
    /// Ordering key; smaller keys are extracted first
    pub key: K,
    /// Identifier, unique among resident elements
    pub id: I,
    /// Extra data carried unchanged
    pub payload: T,
}

impl<K, I, T> HeapElement<K, I, T> {
    /// Creates a new element.
    pub fn new(key: K, id: I, payload: T) -> Self {
        HeapElement { key, id, payload }
    }
}

impl<K, I, T> From<(K, I, T)> for HeapElement<K, I, T> {
    fn from((key, id, payload): (K, I, T)) -> Self {
        HeapElement::new(key, id, payload)
    }
}

/// A binary min-heap whose elements can be looked up and removed by id.
///
/// The array and the position map are only ever mutated together, so no
/// position is observable outside this type.
///
/// `M` selects the position map. The default [`FxHashMap`] works for any
/// hashable id; [`DensePositions`](crate::position::DensePositions) is faster
/// for small integer ids.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, I, T, M = FxHashMap<I, usize>> {
    /// The heap data stored as a complete binary tree
    data: Vec<HeapElement<K, I, T>>,
    /// Maps each resident id to its slot in `data`
    positions: M,
}

impl<K, I, T> IndexedMinHeap<K, I, T>
where
    K: Ord,
    I: Copy + Eq + Hash,
{
    /// Creates a new empty heap with a hash-based position map.
    pub fn new() -> Self {
        Self::with_positions(FxHashMap::default())
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a heap from `batch` in linear time.
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateId`] if two elements share an id.
    pub fn from_batch<B>(batch: B) -> Result<Self, HeapError>
    where
        B: IntoIterator<Item = HeapElement<K, I, T>>,
    {
        let mut heap = Self::new();
        heap.heapify(batch)?;
        Ok(heap)
    }
}

impl<K, I, T, M> IndexedMinHeap<K, I, T, M>
where
    K: Ord,
    I: Copy,
    M: PositionMap<I>,
{
    /// Creates an empty heap that records positions in `positions`.
    ///
    /// Any entries already present in `positions` are discarded.
    pub fn with_positions(mut positions: M) -> Self {
        positions.clear();
        IndexedMinHeap {
            data: Vec::new(),
            positions,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if an element with `id` is resident.
    pub fn contains(&self, id: &I) -> bool {
        self.positions.position(id).is_some()
    }

    /// Returns the element with the smallest key without removing it.
    pub fn peek(&self) -> Option<&HeapElement<K, I, T>> {
        self.data.first()
    }

    /// Returns the element associated with `id`, or `None` if it is absent.
    pub fn get(&self, id: &I) -> Option<&HeapElement<K, I, T>> {
        self.positions.position(id).map(|index| &self.data[index])
    }

    /// Iterates over the resident elements in array order.
    ///
    /// The order is that of the underlying tree and carries no meaning
    /// beyond the first element being a minimum.
    pub fn iter(&self) -> std::slice::Iter<'_, HeapElement<K, I, T>> {
        self.data.iter()
    }

    /// Inserts `element`, restoring the heap property by sifting it up.
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateId`] if an element with the same id is
    /// already resident. The heap is left unchanged and `element` is dropped.
    pub fn insert(&mut self, element: HeapElement<K, I, T>) -> Result<(), HeapError> {
        if self.positions.position(&element.id).is_some() {
            return Err(HeapError::DuplicateId);
        }
        let index = self.data.len();
        self.positions.set(element.id, index);
        self.data.push(element);
        self.sift_up(index);
        debug_assert!(self.verify_invariants());
        Ok(())
    }

    /// Replaces the heap contents with `batch` and restores the heap
    /// property bottom-up.
    ///
    /// Runs in O(n): every internal node is sifted down once, from the last
    /// parent to the root.
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateId`] if two elements of `batch` share an
    /// id. The previous contents are kept in that case.
    pub fn heapify<B>(&mut self, batch: B) -> Result<(), HeapError>
    where
        B: IntoIterator<Item = HeapElement<K, I, T>>,
    {
        let batch: Vec<_> = batch.into_iter().collect();

        self.positions.clear();
        for (index, element) in batch.iter().enumerate() {
            if self.positions.position(&element.id).is_some() {
                self.reindex();
                debug_assert!(self.verify_invariants());
                return Err(HeapError::DuplicateId);
            }
            self.positions.set(element.id, index);
        }
        self.data = batch;

        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
        debug_assert!(self.verify_invariants());
        Ok(())
    }

    /// Removes and returns the element with the smallest key.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<HeapElement<K, I, T>, HeapError> {
        self.pop().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the element with the smallest key, or `None` if
    /// the heap is empty.
    pub fn pop(&mut self) -> Option<HeapElement<K, I, T>> {
        if self.data.is_empty() {
            return None;
        }

        // swap_remove moves the last element into the root slot
        let min = self.data.swap_remove(0);
        self.positions.remove(&min.id);

        if let Some(moved) = self.data.first() {
            self.positions.set(moved.id, 0);
            self.sift_down(0);
        }

        debug_assert!(self.verify_invariants());
        Some(min)
    }

    /// Removes the element with `id` wherever it sits in the heap.
    ///
    /// The last element fills the vacated slot and is then sifted down, or
    /// up if it did not move down, so the heap property holds whatever the
    /// relocated key is. Returns `None` if `id` is not resident.
    pub fn delete(&mut self, id: &I) -> Option<HeapElement<K, I, T>> {
        let index = self.positions.remove(id)?;
        let removed = self.data.swap_remove(index);

        if index < self.data.len() {
            self.positions.set(self.data[index].id, index);
            if !self.sift_down(index) {
                self.sift_up(index);
            }
        }

        debug_assert!(self.verify_invariants());
        Some(removed)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Consumes the heap, returning its elements in array order.
    pub fn into_vec(self) -> Vec<HeapElement<K, I, T>> {
        self.data
    }

    /// Checks the heap property and that the position map is a bijection
    /// onto the array.
    ///
    /// Debug builds run this after every mutation, which makes each
    /// operation O(n) there.
    pub fn verify_invariants(&self) -> bool {
        let ordered = (1..self.data.len())
            .all(|index| self.data[(index - 1) / 2].key <= self.data[index].key);

        // Every slot resolving to itself plus equal sizes means no stale ids.
        let synced = self.positions.len() == self.data.len()
            && self
                .data
                .iter()
                .enumerate()
                .all(|(index, element)| self.positions.position(&element.id) == Some(index));

        ordered && synced
    }

    /// Swaps two slots and records both new positions.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions.set(self.data[a].id, a);
        self.positions.set(self.data[b].id, b);
    }

    /// Move element at index up to maintain heap property.
    ///
    /// Returns true if the element moved.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let start = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].key < self.data[parent].key {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index != start
    }

    /// Move element at index down to maintain heap property.
    ///
    /// Returns true if the element moved.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let start = index;
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].key < self.data[smallest].key {
                smallest = left;
            }
            if right < len && self.data[right].key < self.data[smallest].key {
                smallest = right;
            }

            if smallest != index {
                self.swap_slots(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        index != start
    }

    /// Rebuilds the position map from the array.
    fn reindex(&mut self) {
        self.positions.clear();
        for (index, element) in self.data.iter().enumerate() {
            self.positions.set(element.id, index);
        }
    }
}

impl<K, I, T, M> Default for IndexedMinHeap<K, I, T, M>
where
    K: Ord,
    I: Copy,
    M: PositionMap<I> + Default,
{
    fn default() -> Self {
        Self::with_positions(M::default())
    }
}

impl<'a, K, I, T, M> IntoIterator for &'a IndexedMinHeap<K, I, T, M>
where
    K: Ord,
    I: Copy,
    M: PositionMap<I>,
{
    type Item = &'a HeapElement<K, I, T>;
    type IntoIter = std::slice::Iter<'a, HeapElement<K, I, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
