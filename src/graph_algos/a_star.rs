use crate::geometry::{cell_center, octile_distance, GridPos, Point};
use crate::grid::Grid;
use super::frontier::{Frontier, FrontierKind};
use super::{shortest_path, SearchNode, UNREACHED};

use log::{debug, trace, warn};


/// Cost of a horizontal or vertical step
pub const STRAIGHT_COST: u32 = 10;
/// Cost of a diagonal step, 10:14 approximates 1:sqrt(2)
pub const DIAGONAL_COST: u32 = 14;

/// Neighbor offsets in expansion order, +y is north:
///   NW   N   NE
///   W   [C]   E
///   SW   S   SE
/// The order decides which of several equal-cost paths is returned
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0),         (1, 0),
    (-1, -1), (0, -1), (1, -1),
];


/// Outcome of one search
/// An empty path means no route: out-of-bounds endpoints, disconnected
/// cells, or the iteration cap was hit
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub path: Vec<Point>, // Cell centers from start to goal inclusive
    pub cells: Vec<GridPos>, // Same path in grid coordinates
    pub explored: Vec<Point>, // Centers of every settled cell, in settle order
    pub explored_cells: Vec<GridPos>,
    pub cost: Option<u32>, // Total path cost, None when no path
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells on the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}


/// Heuristic: octile distance, the exact cost on an open grid
/// Never drops by more than the cost of the step taken, so a settled node's
/// cost is final
pub fn heuristic(from: GridPos, to: GridPos) -> u32 {
    octile_distance(from.x, from.y, to.x, to.y, STRAIGHT_COST as i32, DIAGONAL_COST as i32) as u32
}

/// Cost of a single step between 8-neighbours, None if the cells aren't adjacent
pub fn step_cost(from: GridPos, to: GridPos) -> Option<u32> {
    if !from.is_adjacent(to) {
        return None;
    }
    if from.x != to.x && from.y != to.y {
        Some(DIAGONAL_COST)
    } else {
        Some(STRAIGHT_COST)
    }
}

/// Total cost of walking a sequence of cells
/// None for an empty sequence or when two consecutive cells aren't adjacent
pub fn path_cost(cells: &[GridPos]) -> Option<u32> {
    if cells.is_empty() {
        return None;
    }
    cells.windows(2).try_fold(0, |total, step| Some(total + step_cost(step[0], step[1])?))
}


/// A* search over an 8-connected grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Each call allocates its own search state; nothing carries over between calls
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFinder {
    pub frontier: FrontierKind,
}

impl PathFinder {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Find the cheapest path from start to goal
    /// Out-of-bounds start or goal gives an empty result.
    /// The start is seeded even when it isn't crossable; a non-crossable goal
    /// is only reached when it is also the start.
    pub fn compute(&self, grid: &Grid, start: GridPos, goal: GridPos, cell_size: f64) -> SearchResult {

        if !grid.is_in_bounds(start.x, start.y) || !grid.is_in_bounds(goal.x, goal.y) {
            debug!("path search rejected: start {:?} or goal {:?} outside {}x{} grid",
                start, goal, grid.width(), grid.height());
            return SearchResult::default();
        }

        debug!("path search {:?} -> {:?} on {}x{} grid ({:?})",
            start, goal, grid.width(), grid.height(), self.frontier);

        let mut nodes: Vec<SearchNode> = (0..grid.len())
            .map(|index| {
                let pos = grid.pos_of(index);
                SearchNode::new(pos.x, pos.y)
            })
            .collect();
        let mut frontier = Frontier::new(self.frontier);

        // Seed
        let start_index = grid.index_of(start.x, start.y);
        let start_node = &mut nodes[start_index];
        start_node.cost_from_start = 0;
        start_node.estimated_cost_to_goal = heuristic(start, goal);
        frontier.push(start_index, start_node.total_cost());

        let mut result = SearchResult::default();

        // Each pop settles a distinct node, so a well-formed search never needs more
        let max_iterations = grid.len();
        let mut iterations = 0;

        while let Some(index) = frontier.pop(&nodes) {

            iterations += 1;
            if iterations > max_iterations {
                warn!("path search {:?} -> {:?}: maximum iterations ({}) reached, path not found",
                    start, goal, max_iterations);
                return SearchResult {
                    explored: result.explored,
                    explored_cells: result.explored_cells,
                    ..SearchResult::default()
                };
            }

            let current = GridPos::new(nodes[index].x, nodes[index].y);
            if !nodes[index].is_settled {
                result.explored.push(cell_center(current, cell_size));
                result.explored_cells.push(current);
            }

            if current == goal {
                let cells = shortest_path(&nodes, index);
                result.path = cells.iter().map(|&pos| cell_center(pos, cell_size)).collect();
                result.cells = cells;
                result.cost = Some(nodes[index].cost_from_start);
                debug!("path found: {} cells, cost {}, {} explored",
                    result.cells.len(), nodes[index].cost_from_start, result.explored.len());
                return result;
            }

            nodes[index].is_settled = true;
            trace!("settled {:?} g={} f={}", current, nodes[index].cost_from_start, nodes[index].total_cost());

            for direction in DIRECTIONS {
                relax(grid, &mut nodes, &mut frontier, index, direction, goal);
            }
        }

        debug!("no path {:?} -> {:?}: frontier exhausted after {} explored",
            start, goal, result.explored.len());
        result
    }
}


/// Offer the neighbor at `current + direction` a path through `current`
fn relax(
    grid: &Grid,
    nodes: &mut [SearchNode],
    frontier: &mut Frontier,
    current_index: usize,
    (dx, dy): (i32, i32),
    goal: GridPos,
) {
    let current = GridPos::new(nodes[current_index].x, nodes[current_index].y);
    let neighbor = current.offset(dx, dy);

    // Check if neighbor is valid and walkable
    if !grid.is_in_bounds(neighbor.x, neighbor.y) || !grid.is_crossable(neighbor.x, neighbor.y) {
        return;
    }

    let neighbor_index = grid.index_of(neighbor.x, neighbor.y);
    if nodes[neighbor_index].is_settled {
        return;
    }

    let move_cost = if dx != 0 && dy != 0 { DIAGONAL_COST } else { STRAIGHT_COST };
    let new_cost = nodes[current_index].cost_from_start + move_cost;

    let node = &mut nodes[neighbor_index];
    if node.cost_from_start == UNREACHED || new_cost < node.cost_from_start {
        node.cost_from_start = new_cost;
        node.estimated_cost_to_goal = heuristic(neighbor, goal);
        node.predecessor = current_index;
        frontier.push(neighbor_index, node.total_cost());
    }
}


/// Search with the default PathFinder, taking coordinates the way a host
/// editor passes them
pub fn compute(grid: &Grid, start_x: i32, start_y: i32, goal_x: i32, goal_y: i32, cell_size: f64) -> SearchResult {
    PathFinder::new().compute(grid, GridPos::new(start_x, start_y), GridPos::new(goal_x, goal_y), cell_size)
}
