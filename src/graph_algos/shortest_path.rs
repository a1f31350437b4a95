use crate::geometry::GridPos;
use super::{SearchNode, NO_PREDECESSOR};

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered cells from start to goal
/// nodes: search arena, predecessor links are indices into it
/// goal_index: index of the goal node in the arena
pub(crate) fn shortest_path(nodes: &[SearchNode], goal_index: usize) -> Vec<GridPos> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    // The chain can't cycle: a node only links to a predecessor with strictly lower cost
    while current_index != NO_PREDECESSOR {
        let node = &nodes[current_index];
        path.push(GridPos::new(node.x, node.y));
        current_index = node.predecessor;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
