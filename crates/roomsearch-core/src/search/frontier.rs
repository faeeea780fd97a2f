use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by score, then by insertion sequence
#[derive(Debug, Clone)]
struct HeapEntry<T> {
    score: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier with first-in-first-out tie-breaking
///
/// Among entries with equal scores the one pushed first pops first, so the order
/// matches a stable sort of the frontier before every extraction.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { score, seq, item }));
    }

    /// Remove the entry with the lowest score, returning `(score, item)`
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.score, entry.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_score_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(3.0, "c");
        frontier.push(1.0, "a");
        frontier.push(2.0, "b");

        assert_eq!(frontier.pop(), Some((1.0, "a")));
        assert_eq!(frontier.pop(), Some((2.0, "b")));
        assert_eq!(frontier.pop(), Some((3.0, "c")));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(1.0, "first");
        frontier.push(0.5, "cheap");
        frontier.push(1.0, "second");
        frontier.push(1.0, "third");

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|(_, item)| item)).collect();
        assert_eq!(order, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_ties_hold_across_interleaved_pushes() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(2.0, "x");
        frontier.push(1.0, "a");
        assert_eq!(frontier.pop(), Some((1.0, "a")));
        frontier.push(2.0, "y");
        frontier.push(2.0, "z");

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some((2.0, "x")));
        assert_eq!(frontier.pop(), Some((2.0, "y")));
        assert_eq!(frontier.pop(), Some((2.0, "z")));
        assert!(frontier.is_empty());
    }
}
