//! # Array Heap
//!
//! Binary max/min heaps over a growable array, plus the underlying heap
//! algorithms as free functions usable on raw slices.
//!
//! The crate has two layers. The [`algo`] module holds the stateless
//! algorithms (sift-up, sift-down, heapify, heapsort, validity scan) operating
//! on caller-owned buffers. [`Heap`] owns a buffer and layers a capacity
//! policy on top: it doubles when full and halves when a pop leaves it at most
//! a quarter full, so push/pop stay amortized O(log n) and consecutive
//! reallocations are always many operations apart.
//!
//! ## Key Features
//!
//! * **Two orderings, one implementation:** [`MaxHeap`] and [`MinHeap`] are the
//!   same generic container instantiated with the [`Max`] or [`Min`] policy;
//!   they share every line of algorithm and lifecycle code.
//! * **Raw-slice algorithms:** heapify or heapsort an array you already own,
//!   no container required.
//! * **Explicit capacity policy:** growth and shrink thresholds are part of the
//!   contract, observable through [`Heap::capacity`].
//! * **Explicit errors:** popping or peeking an empty heap returns
//!   [`HeapError::Empty`] instead of a silent default.
//!
//! ## Examples
//!
//! ### Container
//!
//! ```rust
//! use array_heap::{HeapError, MaxHeap, MinHeap};
//!
//! let mut heap = MaxHeap::from_slice(&[5, 2, 9, 1, 5, 6]);
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.pop(), Ok(6));
//!
//! heap.push(42);
//! assert_eq!(heap.pop(), Ok(42));
//!
//! let mut empty: MinHeap<i32> = MinHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::Empty));
//! ```
//!
//! ### Raw-slice algorithms
//!
//! ```rust
//! use array_heap::{algo, Max, Min};
//!
//! let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
//! algo::heap_sort::<Max, _>(&mut data);
//! assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
//!
//! algo::heapify::<Min, _>(&mut data);
//! assert!(algo::is_heap::<Min, _>(&data));
//! assert_eq!(data[0], 1);
//! ```

// --- Module Declarations ---

pub mod algo;
pub mod error;
pub mod heap;
pub mod kind;

// --- Re-exports ---

pub use error::HeapError;
pub use heap::{Heap, IntoIter, MaxHeap, MinHeap};
pub use kind::{Kind, Max, Min};
