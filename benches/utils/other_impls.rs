use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub(crate) fn heap_sort_std(keys: &[u64]) -> Vec<u64> {
    let mut heap = BinaryHeap::with_capacity(keys.len());
    for k in keys {
        heap.push(Reverse(*k));
    }
    let mut sorted = Vec::with_capacity(keys.len());
    while let Some(Reverse(k)) = heap.pop() {
        sorted.push(k);
    }
    sorted
}
