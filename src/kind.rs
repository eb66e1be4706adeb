//! Ordering policies for the heap family.
//!
//! A heap is parameterized by a [`Kind`] marker type that decides which of two
//! elements "outranks" the other. [`Max`] puts the greatest element at the
//! root, [`Min`] the smallest. The two kinds share every line of algorithm and
//! lifecycle code; the policy is the only difference.

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Max {}
    impl Sealed for super::Min {}
}

/// The ordering policy of a heap.
///
/// Sealed: the crate ships exactly two kinds, [`Max`] and [`Min`]. Custom
/// comparators are out of scope; wrap your element type (e.g. with
/// `core::cmp::Reverse` or a newtype `Ord` impl) to change the order instead.
pub trait Kind: sealed::Sealed {
    /// Returns true when `a` has strictly higher priority than `b`.
    fn outranks<T: Ord>(a: &T, b: &T) -> bool;
}

/// Max-heap policy: the root holds the greatest element.
pub enum Max {}

/// Min-heap policy: the root holds the smallest element.
pub enum Min {}

impl Kind for Max {
    #[inline]
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

impl Kind for Min {
    #[inline]
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_max_outranks() {
        assert!(Max::outranks(&2, &1));
        assert!(!Max::outranks(&1, &2));
        // Strict: equal elements never outrank each other.
        assert!(!Max::outranks(&1, &1));
    }

    #[test]
    fn test_kind_min_outranks() {
        assert!(Min::outranks(&1, &2));
        assert!(!Min::outranks(&2, &1));
        assert!(!Min::outranks(&1, &1));
    }
}
