/**
 * A fixed-capacity binary min-heap.
 *
 * Elements live in a flat Vec that is the implicit complete binary tree: the
 * children of slot i are 2i + 1 and 2i + 2. The Vec's length is the heap size,
 * so occupied slots are always exactly [0, len).
 */
use crate::element::Keyed;
use crate::errors::HeapError;
use crate::pq::PriorityQueue;
use crate::utils::{left, parent, right};

pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    capacity: usize,
    elements: Vec<T>,
}

impl<T: Keyed> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new(DEFAULT_CAPACITY)
    }
}

impl<T: Keyed> MinHeap<T> {
    /// An empty heap that holds at most `capacity` elements.
    /// A zero capacity gives a heap that rejects every insert.
    pub fn new(capacity: usize) -> Self {
        MinHeap {
            capacity,
            elements: Vec::with_capacity(capacity),
        }
    }

    /**
     * Build a heap from unordered elements in linear time.
     *
     * Every internal node is sifted down, deepest first, so each call sees
     * children that are already valid heaps.
     */
    pub fn from_vec(capacity: usize, mut elements: Vec<T>) -> Result<Self, HeapError> {
        if elements.len() > capacity {
            log::debug!(
                "Rejecting {} elements for a heap of capacity {}",
                elements.len(),
                capacity
            );
            return Err(HeapError::CapacityExceeded { capacity });
        }
        elements.reserve_exact(capacity - elements.len());
        let mut heap = MinHeap {
            capacity,
            elements,
        };
        for index in (0..heap.len() / 2).rev() {
            heap.min_heapify(index);
        }
        Ok(heap)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// The minimum element, left in place.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn insert(&mut self, element: T) -> Result<(), HeapError> {
        self.try_insert(element).map_err(|(err, _)| err)
    }

    /// Like `insert`, but a rejected element is handed back to the caller.
    pub fn try_insert(&mut self, element: T) -> Result<(), (HeapError, T)> {
        if self.is_full() {
            log::debug!("Insert rejected: heap is at capacity {}", self.capacity);
            let err = HeapError::CapacityExceeded {
                capacity: self.capacity,
            };
            return Err((err, element));
        }
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            log::debug!("Extract rejected: heap is empty");
            return Err(HeapError::EmptyHeap);
        }
        // The last element takes the root's slot.
        let min = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.min_heapify(0);
        }
        Ok(min)
    }

    /// Drain the heap in non-decreasing key order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(element) = self.extract_min() {
            sorted.push(element);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index != 0 {
            let parent_index = parent(index);
            if self.elements[parent_index].key() <= self.elements[index].key() {
                break;
            }
            self.elements.swap(index, parent_index);
            index = parent_index;
        }
    }

    /**
     * Sift the element at `index` down until neither child is strictly
     * smaller.
     *
     * The subtrees under `index` must already be heaps. Ties keep the parent
     * in place.
     */
    fn min_heapify(&mut self, mut index: usize) {
        let size = self.elements.len();
        loop {
            let left_index = left(index);
            let right_index = right(index);
            let mut smallest = index;

            if left_index < size
                && self.elements[left_index].key() < self.elements[smallest].key()
            {
                smallest = left_index;
            }
            if right_index < size
                && self.elements[right_index].key() < self.elements[smallest].key()
            {
                smallest = right_index;
            }
            if smallest == index {
                return;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len())
            .all(|i| self.elements[parent(i)].key() <= self.elements[i].key())
    }
}

impl<T: Keyed> PriorityQueue<T> for MinHeap<T> {
    fn insert(&mut self, element: T) -> Result<(), HeapError> {
        MinHeap::insert(self, element)
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        MinHeap::extract_min(self)
    }
}
