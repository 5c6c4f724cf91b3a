use derive_more::Display;
use thiserror::Error;

/// Which way a key update must move under the queue's comparator.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum KeyDirection {
    #[display("decrease")]
    Decrease,
    #[display("increase")]
    Increase,
}

/// Failures reported by the heap queues.
///
/// Every variant is raised before the queue is mutated, so a failed call
/// leaves the queue exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("Priority queue underflow")]
    Underflow,
    #[error("Handle {handle} is out of range for a queue of {capacity} handles")]
    HandleOutOfRange { handle: usize, capacity: usize },
    #[error("Handle {0} is already in the priority queue")]
    DuplicateHandle(usize),
    #[error("Handle {0} is not in the priority queue")]
    NotPresent(usize),
    #[error("Key for handle {handle} must strictly {direction}")]
    InvalidKeyDirection {
        handle: usize,
        direction: KeyDirection,
    },
    #[error("Heap arity must be at least 1, got {0}")]
    InvalidArity(usize),
    #[error("Heap arity 2^{0} does not fit in a machine word")]
    InvalidExponent(u32),
}

pub type Result<T> = std::result::Result<T, HeapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(HeapError::Underflow.to_string(), "Priority queue underflow");
        assert_eq!(
            HeapError::InvalidKeyDirection {
                handle: 3,
                direction: KeyDirection::Decrease
            }
            .to_string(),
            "Key for handle 3 must strictly decrease"
        );
        assert_eq!(
            HeapError::HandleOutOfRange {
                handle: 9,
                capacity: 4
            }
            .to_string(),
            "Handle 9 is out of range for a queue of 4 handles"
        );
    }
}
