//! Free heap algorithms over raw slices.
//!
//! Everything in this module is stateless: the caller supplies the buffer and
//! the logical size (as the slice length, or as an explicit `len` for the
//! fixed-buffer [`push_into`]/[`pop_from`] pair) and picks the ordering policy
//! through the [`Kind`] type parameter. [`crate::Heap`] is built on top of
//! these functions, but they are equally usable on a plain array on the stack.
//!
//! The tree lives in the slice in the usual implicit-binary-tree layout:
//! `heap[0]` is the root and the children of node `i` sit at `2i + 1` and
//! `2i + 2`.

use crate::error::HeapError;
use crate::kind::Kind;

// --- Index algebra ---

/// Index of the parent of node `i`.
///
/// The root has no parent; calling this with `i == 0` is a contract violation
/// caught by a debug assertion.
#[inline]
pub const fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / 2
}

/// Index of the left child of node `i`.
#[inline]
pub const fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of node `i`.
#[inline]
pub const fn right_child(i: usize) -> usize {
    2 * i + 2
}

// --- Sift primitives ---

/// Moves the element at `i` up toward the root until its parent outranks it.
///
/// Restores the heap invariant after the element at `i` (typically the last
/// slot) has been given a value of arbitrary priority, provided the rest of
/// the slice is already heap-ordered. An out-of-range `i` is a no-op.
pub fn sift_up<K: Kind, T: Ord>(heap: &mut [T], mut i: usize) {
    if i >= heap.len() {
        return;
    }
    while i != 0 {
        let p = parent(i);
        if !K::outranks(&heap[i], &heap[p]) {
            break;
        }
        heap.swap(i, p);
        i = p;
    }
}

/// Moves the element at `i` down until no child outranks it.
///
/// At each level the higher-priority child is chosen; the right child wins the
/// comparison only when it strictly outranks the left one. Restores the heap
/// invariant after the root has been replaced, provided both subtrees of `i`
/// are already heap-ordered. An out-of-range `i` is a no-op.
pub fn sift_down<K: Kind, T: Ord>(heap: &mut [T], mut i: usize) {
    let len = heap.len();
    if i >= len {
        return;
    }
    let mut child = left_child(i);
    while child < len {
        if child + 1 < len && K::outranks(&heap[child + 1], &heap[child]) {
            child += 1;
        }
        if !K::outranks(&heap[child], &heap[i]) {
            break;
        }
        heap.swap(child, i);
        i = child;
        child = left_child(i);
    }
}

// --- Whole-slice algorithms ---

/// Rearranges an arbitrary slice into heap order, in place, in O(n).
///
/// Sifts down every internal node from the last parent back to the root;
/// leaves need no work, which is where the linear bound comes from.
pub fn heapify<K: Kind, T: Ord>(heap: &mut [T]) {
    if heap.len() < 2 {
        return;
    }
    let mut i = parent(heap.len() - 1);
    loop {
        sift_down::<K, T>(heap, i);
        if i == 0 {
            break;
        }
        i -= 1;
    }
}

/// Sorts the slice in place in O(n log n): ascending under [`Max`], descending
/// under [`Min`].
///
/// Classic heapsort: heapify, then repeatedly swap the root behind the live
/// prefix and sift the new root down. Not stable.
///
/// [`Max`]: crate::Max
/// [`Min`]: crate::Min
pub fn heap_sort<K: Kind, T: Ord>(data: &mut [T]) {
    heapify::<K, T>(data);
    let mut len = data.len();
    while len > 1 {
        len -= 1;
        data.swap(0, len);
        sift_down::<K, T>(&mut data[..len], 0);
    }
}

// --- Fixed-buffer push/pop ---

/// Inserts `value` into a heap occupying the first `len` slots of `buf`,
/// returning the new logical size `len + 1`.
///
/// The slots at `buf[len..]` are spare capacity; `buf[len]` is overwritten.
///
/// # Panics
///
/// Panics if `len >= buf.len()` — ensuring spare capacity is the caller's
/// contract (the container layer grows its buffer before delegating here).
pub fn push_into<K: Kind, T: Ord>(buf: &mut [T], len: usize, value: T) -> usize {
    buf[len] = value;
    sift_up::<K, T>(&mut buf[..len + 1], len);
    len + 1
}

/// Removes the root of a heap occupying the first `len` slots of `buf`,
/// returning the new logical size `len - 1`.
///
/// The removed root is parked at `buf[len - 1]`, just past the live prefix,
/// where the caller can retrieve it. Fails with [`HeapError::Empty`] when
/// `len == 0`, leaving the buffer untouched.
pub fn pop_from<K: Kind, T: Ord>(buf: &mut [T], len: usize) -> Result<usize, HeapError> {
    if len == 0 {
        return Err(HeapError::Empty);
    }
    buf.swap(0, len - 1);
    sift_down::<K, T>(&mut buf[..len - 1], 0);
    Ok(len - 1)
}

// --- Validity scan ---

/// Returns the index of the first element that outranks its parent, or
/// `heap.len()` when the whole slice is heap-ordered.
///
/// Parents are visited in `sift_down` order, but both children are checked in
/// index order so the lower of two offending siblings wins: the result is the
/// exact length of the longest heap-ordered prefix.
pub fn is_heap_until<K: Kind, T: Ord>(heap: &[T]) -> usize {
    let len = heap.len();
    let mut i = 0;
    let mut child = 1;
    while child < len {
        if K::outranks(&heap[child], &heap[i]) {
            return child;
        }
        if child + 1 < len && K::outranks(&heap[child + 1], &heap[i]) {
            return child + 1;
        }
        i += 1;
        child = left_child(i);
    }
    len
}

/// Returns true when the whole slice satisfies the heap invariant for `K`.
#[inline]
pub fn is_heap<K: Kind, T: Ord>(heap: &[T]) -> bool {
    is_heap_until::<K, T>(heap) == heap.len()
}
