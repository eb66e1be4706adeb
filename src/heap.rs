use core::marker::PhantomData;
use core::slice;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::algo;
use crate::error::HeapError;
use crate::kind::{Kind, Max, Min};

/// A binary heap over a growable array with an explicit capacity policy.
///
/// # Behavior
/// * **Ordering:** Supports both `Max` (default) and `Min` heap behavior via
///   the [`Kind`] parameter.
/// * **Capacity:** Grows by doubling when full; shrinks by halving when a pop
///   leaves the heap at most a quarter full, never below
///   [`Self::INITIAL_CAPACITY`]. The gap between the two thresholds keeps
///   every reallocation at least `capacity / 4` operations apart.
/// * **Complexity:** Push and pop are amortized O(log n); bulk construction is
///   O(n); top/len are O(1).
///
/// # Invariant
/// * The live prefix of the buffer is always heap-ordered: no element outranks
///   its parent at `(i - 1) / 2`. The highest-priority element sits at index 0.
pub struct Heap<T: Ord, K: Kind = Max> {
    data: Vec<T>,
    /// Policy capacity. The `Vec` is kept reserved to exactly this many slots,
    /// so `data.len() <= cap` always holds.
    cap: usize,
    kind: PhantomData<K>,
}

/// A heap whose root is the greatest element.
pub type MaxHeap<T> = Heap<T, Max>;

/// A heap whose root is the smallest element.
pub type MinHeap<T> = Heap<T, Min>;

impl<T: Ord, K: Kind> Heap<T, K> {
    /// Capacity of a freshly constructed empty heap, and the floor below which
    /// shrinking never goes.
    pub const INITIAL_CAPACITY: usize = 16;

    /// Creates a new empty heap with the default initial capacity.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(Self::INITIAL_CAPACITY),
            cap: Self::INITIAL_CAPACITY,
            kind: PhantomData,
        }
    }

    /// Builds a heap from a slice in O(n).
    ///
    /// The capacity is the smallest power of two holding the elements (at
    /// least 1), and the invariant is established with a single heapify pass
    /// rather than n sift-ups.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(elements.to_vec())
    }

    fn from_vec(mut data: Vec<T>) -> Self {
        let cap = data.len().max(1).next_power_of_two();
        data.reserve_exact(cap - data.len());
        algo::heapify::<K, T>(&mut data);
        Self {
            data,
            cap,
            kind: PhantomData,
        }
    }

    // --- Inspection ---

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the policy capacity: the number of slots currently reserved.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the highest-priority element without removing it.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Read-only view of the live buffer in internal array order.
    ///
    /// The only guarantee is the heap invariant; callers must not assume any
    /// further ordering.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    // --- Modification ---

    /// Inserts an element, growing the buffer first when it is full.
    pub fn push(&mut self, value: T) {
        if self.data.len() == self.cap {
            self.grow();
        }
        self.data.push(value);
        let last = self.data.len() - 1;
        algo::sift_up::<K, T>(&mut self.data, last);
    }

    /// Removes and returns the highest-priority element.
    ///
    /// The last element moves into the root slot and sifts down, then the
    /// shrink rule is applied. Fails with [`HeapError::Empty`] on an empty
    /// heap, leaving it untouched.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        // Cannot fail past the emptiness check above.
        let root = self.data.pop().ok_or(HeapError::Empty)?;
        algo::sift_down::<K, T>(&mut self.data, 0);
        self.maybe_shrink();
        Ok(root)
    }

    /// Removes all elements in priority order into a `Vec`.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            out.push(value);
        }
        out
    }

    // --- Diagnostics ---

    /// Prints the live buffer in internal array order. Debugging aid only.
    pub fn dump(&self)
    where
        T: Debug,
    {
        println!("{:?}", self.data);
    }

    // --- Capacity policy ---

    fn grow(&mut self) {
        self.cap *= 2;
        self.data.reserve_exact(self.cap - self.data.len());
    }

    /// Halves the capacity when the heap is at most a quarter full, with the
    /// initial capacity as the floor. Evaluated after the pop's decrement.
    ///
    /// Halving at quarter-full lands the heap at half of the new capacity, so
    /// both the next grow and the next shrink are at least `cap / 4`
    /// operations away and alternating push/pop at a boundary cannot
    /// reallocate on every call.
    fn maybe_shrink(&mut self) {
        if 4 * self.data.len() <= self.cap && self.cap > Self::INITIAL_CAPACITY {
            self.cap /= 2;
            self.data.shrink_to(self.cap);
        }
    }
}

// --- Trait Implementations ---

impl<T: Ord, K: Kind> Default for Heap<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Clone for Heap<T, K>
where
    T: Ord + Clone,
    K: Kind,
{
    fn clone(&self) -> Self {
        let mut data = self.data.clone();
        data.reserve_exact(self.cap - data.len());
        Self {
            data,
            cap: self.cap,
            kind: PhantomData,
        }
    }
}

impl<T, K> Debug for Heap<T, K>
where
    T: Ord + Debug,
    K: Kind,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord, K: Kind> Extend<T> for Heap<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord, K: Kind> FromIterator<T> for Heap<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, K: Kind> From<Vec<T>> for Heap<T, K> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord, K: Kind, const N: usize> From<[T; N]> for Heap<T, K> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

// --- Iterators ---

/// Draining iterator yielding elements in priority order.
pub struct IntoIter<T: Ord, K: Kind> {
    heap: Heap<T, K>,
}

impl<T: Ord, K: Kind> Iterator for IntoIter<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord, K: Kind> ExactSizeIterator for IntoIter<T, K> {}

impl<T: Ord, K: Kind> IntoIterator for Heap<T, K> {
    type Item = T;
    type IntoIter = IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { heap: self }
    }
}

impl<'a, T: Ord, K: Kind> IntoIterator for &'a Heap<T, K> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Tests ---
