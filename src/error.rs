use std::fmt;

/// Error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements, so there is nothing to pop or peek at.
    ///
    /// This is a contract violation by the caller, not a transient condition:
    /// the failed operation leaves the heap untouched, and retrying without
    /// pushing first fails the same way.
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: E) {}
        assert_error(HeapError::Empty);
    }
}
