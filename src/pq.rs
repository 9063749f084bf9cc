use crate::errors::HeapError;

/// A queue that always hands back its smallest element first.
pub trait PriorityQueue<T> {
    fn insert(&mut self, element: T) -> Result<(), HeapError>;

    fn extract_min(&mut self) -> Result<T, HeapError>;
}
