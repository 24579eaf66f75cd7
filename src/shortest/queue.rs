//! Min-priority queue with FIFO tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry {
    key: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // BinaryHeap is a max-heap: reverse both key and sequence.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Frontier of a best-first search.
///
/// Duplicate entries for the same node are allowed; the caller skips the
/// stale ones.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    pushed: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: usize, key: f64) {
        self.heap.push(Entry {
            key,
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }

    /// Removes the entry with the smallest key, earliest push first.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.node)
    }
}
