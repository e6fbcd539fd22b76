//! Descending ordering of score multisets via max-heap extraction

use std::collections::BinaryHeap;

/// Sort `scores` into non-increasing order.
///
/// Every element goes into a max-heap, then the maximum is extracted until
/// the heap is empty. Duplicates are kept; callers wanting distinct scores
/// deduplicate first.
pub fn sort_descending<T, I>(scores: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut heap: BinaryHeap<T> = scores.into_iter().collect();
    let mut sorted = Vec::with_capacity(heap.len());
    while let Some(max) = heap.pop() {
        sorted.push(max);
    }
    sorted
}
