use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HeapError {
    #[error("Heap is at capacity ({capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Cannot extract from an empty heap")]
    EmptyHeap,
}
