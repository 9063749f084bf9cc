mod element;
mod min_heap;
mod pq;
mod utils;

pub mod errors;

pub use element::{Element, Keyed};
pub use errors::HeapError;
pub use min_heap::{MinHeap, DEFAULT_CAPACITY};
pub use pq::PriorityQueue;
