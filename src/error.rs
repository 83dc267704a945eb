//! Failure signals shared by [`BoundedStack`](crate::BoundedStack) and
//! [`Playlist`](crate::Playlist).
//!
//! Every variant is raised synchronously by the call that caused it, and always
//! before the container is mutated.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A stack was constructed with a negative capacity.
    #[error("invalid capacity: {0} (capacity must be non-negative)")]
    InvalidCapacity(isize),

    /// `push` on a stack that already holds `capacity` elements.
    #[error("capacity exceeded: stack is full at {capacity} element(s)")]
    CapacityExceeded { capacity: usize },

    /// `pop` or `peek` on an empty stack.
    #[error("container is empty")]
    EmptyContainer,

    /// `add` of a value equal to one already in the playlist.
    #[error("value already present")]
    DuplicateValue,
}

pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(
            CollectionError::InvalidCapacity(-3).to_string(),
            "invalid capacity: -3 (capacity must be non-negative)"
        );
        assert_eq!(
            CollectionError::CapacityExceeded { capacity: 2 }.to_string(),
            "capacity exceeded: stack is full at 2 element(s)"
        );
        assert_eq!(CollectionError::EmptyContainer.to_string(), "container is empty");
        assert_eq!(CollectionError::DuplicateValue.to_string(), "value already present");
    }

    #[test]
    fn test_error_traits_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CollectionError::EmptyContainer);
        assert!(err.source().is_none());
    }
}
