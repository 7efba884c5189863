//! Errors returned by list operations.

/// The closed set of failures a [`LinkedList`](crate::LinkedList) operation
/// can report. Every failing call returns before mutating anything, so the
/// list is always left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// `pop_back` or `pop_front` was called on an empty list.
    #[error("cannot remove from an empty list")]
    Empty,

    /// An index fell outside the valid range for the operation. Indexed reads
    /// and removals accept `0..len`; insertion also accepts `len` itself.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            ListError::Empty.to_string(),
            "cannot remove from an empty list"
        );
        assert_eq!(
            ListError::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "index 5 out of range for list of length 3"
        );
    }
}
