//! Open sets for [AstarSearch](crate::search::AstarSearch).
//!
//! Both implementations pop the node with the lowest `f = g + h`. Among nodes of equal
//! `f`, the one inserted last is popped first.
use crate::node::Node;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub trait Frontier {
    fn push(&mut self, node: Node);
    /// Removes and returns the best node.
    fn pop(&mut self) -> Option<Node>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

struct SmallestCostHolder {
    estimated_cost: u32,
    seq: u64,
    node: Node,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.seq == other.seq
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest estimated cost first, then latest insertion
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            s => s,
        }
    }
}

/// Binary heap keyed by `f` with the insertion sequence number as secondary key.
#[derive(Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<SmallestCostHolder>,
    next_seq: u64,
}

impl HeapFrontier {
    pub fn new() -> HeapFrontier {
        HeapFrontier::default()
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, node: Node) {
        self.heap.push(SmallestCostHolder {
            estimated_cost: node.f(),
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }
    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|holder| holder.node)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

/// Keeps nodes in a vector that is sorted by descending `f` before every pop, taking the
/// tail. The sort is stable, which yields the same tie-break as [HeapFrontier].
/// O(n log n) per pop.
#[derive(Default)]
pub struct SortedFrontier {
    nodes: Vec<Node>,
}

impl SortedFrontier {
    pub fn new() -> SortedFrontier {
        SortedFrontier::default()
    }
}

impl Frontier for SortedFrontier {
    fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }
    fn pop(&mut self) -> Option<Node> {
        self.nodes.sort_by(|a, b| b.f().cmp(&a.f()));
        self.nodes.pop()
    }
    fn len(&self) -> usize {
        self.nodes.len()
    }
    fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    fn node(i: usize, g: u32, h: u32) -> Node {
        Node::new(Point::new(i as i32, 0), g, h, i)
    }

    fn drain<F: Frontier>(frontier: &mut F) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop())
            .map(|n| n.index)
            .collect()
    }

    fn fill<F: Frontier>(frontier: &mut F) {
        // f values: 5, 3, 7, 3, 5, 3
        for (i, (g, h)) in [(2, 3), (1, 2), (7, 0), (0, 3), (5, 0), (3, 0)]
            .into_iter()
            .enumerate()
        {
            frontier.push(node(i, g, h));
        }
    }

    #[test]
    fn lowest_f_first_latest_insertion_breaks_ties() {
        let mut frontier = HeapFrontier::new();
        fill(&mut frontier);
        assert_eq!(frontier.len(), 6);
        assert_eq!(drain(&mut frontier), vec![5, 3, 1, 4, 0, 2]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn sorted_frontier_matches_heap() {
        let mut heap = HeapFrontier::new();
        let mut sorted = SortedFrontier::new();
        fill(&mut heap);
        fill(&mut sorted);
        assert_eq!(drain(&mut heap), drain(&mut sorted));
    }

    #[test]
    fn interleaved_push_and_pop() {
        let mut heap = HeapFrontier::new();
        let mut sorted = SortedFrontier::new();
        for frontier in [&mut heap as &mut dyn Frontier, &mut sorted] {
            frontier.push(node(0, 0, 4));
            frontier.push(node(1, 1, 3));
            assert_eq!(frontier.pop().map(|n| n.index), Some(1));
            frontier.push(node(2, 2, 2));
            frontier.push(node(3, 1, 5));
            assert_eq!(frontier.pop().map(|n| n.index), Some(2));
            assert_eq!(frontier.pop().map(|n| n.index), Some(0));
            assert_eq!(frontier.pop().map(|n| n.index), Some(3));
            assert_eq!(frontier.pop(), None);
        }
    }

    #[test]
    fn clear_empties_frontier() {
        let mut frontier = HeapFrontier::new();
        fill(&mut frontier);
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
