pub mod a_star;
pub mod frontier;
mod shortest_path;

use shortest_path::shortest_path;

/// Cost sentinel for nodes the search hasn't reached yet
pub(crate) const UNREACHED: u32 = u32::MAX;

/// Predecessor sentinel for the start node
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;

/// Per-cell search state, allocated fresh for every search
/// Nodes live in one arena indexed like the grid (y * width + x);
/// predecessor is an index into that same arena
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) cost_from_start: u32, // g
    pub(crate) estimated_cost_to_goal: u32, // h
    pub(crate) predecessor: usize,
    pub(crate) is_settled: bool,
}

impl SearchNode {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            cost_from_start: UNREACHED,
            estimated_cost_to_goal: 0,
            predecessor: NO_PREDECESSOR,
            is_settled: false,
        }
    }

    /// f = g + h, the frontier ranking key
    pub(crate) fn total_cost(&self) -> u32 {
        self.cost_from_start.saturating_add(self.estimated_cost_to_goal)
    }
}
