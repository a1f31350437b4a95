use crate::collections::FxIndexSet;
use super::SearchNode;

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};


/// Open-set strategy used by the search
/// Both return a path of optimal cost; they may differ in which of several
/// equal-cost paths is returned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    /// Full scan for the lowest total cost on every pop, O(n) per pop
    /// Ties go to the first minimum in open-set order; removal swaps the last
    /// entry into the vacated slot
    #[default]
    LinearScan,
    /// Min-heap on (total cost, insertion order), O(log n) per pop
    /// Ties go to the entry pushed first
    BinaryHeap,
}


/// Heap entry, ordered so BinaryHeap (max-heap) pops the smallest f first
/// and the oldest entry among equal f
#[derive(Debug)]
pub(crate) struct Entry {
    index: usize, // index in the node arena
    f_cost: u32, // total cost at push time
    seq: u64, // push order
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl Eq for Entry {}


/// Nodes reached but not yet settled
pub(crate) enum Frontier {
    LinearScan(FxIndexSet<usize>),
    BinaryHeap {
        heap: BinaryHeap<Entry>,
        next_seq: u64,
    },
}

impl Frontier {

    pub(crate) fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::LinearScan => Frontier::LinearScan(FxIndexSet::default()),
            FrontierKind::BinaryHeap => Frontier::BinaryHeap {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        }
    }

    /// Add a node, or record its improved cost if it is already open
    /// `f_cost` must be the node's current total cost
    pub(crate) fn push(&mut self, index: usize, f_cost: u32) {
        match self {
            Frontier::LinearScan(open) => {
                // Already-open nodes keep their slot; their cost is read from the arena at pop time
                open.insert(index);
            }
            Frontier::BinaryHeap { heap, next_seq } => {
                // Older entries for this node become stale and are dropped in pop
                heap.push(Entry { index, f_cost, seq: *next_seq });
                *next_seq += 1;
            }
        }
    }

    /// Remove and return the open node with the lowest total cost
    pub(crate) fn pop(&mut self, nodes: &[SearchNode]) -> Option<usize> {
        match self {
            Frontier::LinearScan(open) => {
                let mut lowest: Option<(usize, u32)> = None;
                for (position, &index) in open.iter().enumerate() {
                    let cost = nodes[index].total_cost();
                    if lowest.is_none_or(|(_, lowest_cost)| cost < lowest_cost) {
                        lowest = Some((position, cost));
                    }
                }
                let (position, _) = lowest?;
                open.swap_remove_index(position)
            }
            Frontier::BinaryHeap { heap, .. } => {
                while let Some(Entry { index, f_cost, .. }) = heap.pop() {
                    let node = &nodes[index];
                    // Superseded by a cheaper push, or already settled
                    if node.is_settled || f_cost != node.total_cost() {
                        continue;
                    }
                    return Some(index);
                }
                None
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn nodes_with_costs(costs: &[u32]) -> Vec<SearchNode> {
        costs.iter().enumerate().map(|(i, &cost)| {
            let mut node = SearchNode::new(i as i32, 0);
            node.cost_from_start = cost;
            node
        }).collect()
    }

    #[test]
    fn test_linear_scan_first_minimum_and_swap_remove() {
        let nodes = nodes_with_costs(&[5, 3, 7, 3]);
        let mut frontier = Frontier::new(FrontierKind::LinearScan);
        for i in 0..4 {
            frontier.push(i, nodes[i].total_cost());
        }

        // First of the two 3s, then node 3 has been swapped into slot 1
        assert_eq!(frontier.pop(&nodes), Some(1));
        // Open order is now [0, 3, 2]
        assert_eq!(frontier.pop(&nodes), Some(3));
        assert_eq!(frontier.pop(&nodes), Some(0));
        assert_eq!(frontier.pop(&nodes), Some(2));
        assert_eq!(frontier.pop(&nodes), None);
    }

    #[test]
    fn test_linear_scan_ignores_duplicate_push() {
        let mut nodes = nodes_with_costs(&[4, 6]);
        let mut frontier = Frontier::new(FrontierKind::LinearScan);
        frontier.push(0, 4);
        frontier.push(1, 6);

        // Node 1 improves; it keeps a single slot and ranks by its new cost
        nodes[1].cost_from_start = 2;
        frontier.push(1, 2);

        assert_eq!(frontier.pop(&nodes), Some(1));
        assert_eq!(frontier.pop(&nodes), Some(0));
        assert_eq!(frontier.pop(&nodes), None);
    }

    #[test]
    fn test_heap_ties_are_fifo() {
        let nodes = nodes_with_costs(&[3, 3, 1, 3]);
        let mut frontier = Frontier::new(FrontierKind::BinaryHeap);
        for i in [3, 0, 2, 1] {
            frontier.push(i, nodes[i].total_cost());
        }

        assert_eq!(frontier.pop(&nodes), Some(2));
        assert_eq!(frontier.pop(&nodes), Some(3));
        assert_eq!(frontier.pop(&nodes), Some(0));
        assert_eq!(frontier.pop(&nodes), Some(1));
        assert_eq!(frontier.pop(&nodes), None);
    }

    #[test]
    fn test_heap_skips_stale_entries() {
        let mut nodes = nodes_with_costs(&[8, 5]);
        let mut frontier = Frontier::new(FrontierKind::BinaryHeap);
        frontier.push(0, 8);
        frontier.push(1, 5);

        // Node 0 improves, leaving a stale entry at cost 8
        nodes[0].cost_from_start = 2;
        frontier.push(0, 2);

        assert_eq!(frontier.pop(&nodes), Some(0));
        nodes[0].is_settled = true;
        assert_eq!(frontier.pop(&nodes), Some(1));
        nodes[1].is_settled = true;
        assert_eq!(frontier.pop(&nodes), None);
    }
}
