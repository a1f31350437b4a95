//! Deterministic A* search over uniform 2D occupancy grids.
//!
//! A [`Grid`] holds one crossable/blocked flag per cell. [`PathFinder::compute`]
//! (or the [`compute`] shorthand) finds the cheapest 8-connected path between
//! two cells, with straight steps costing [`STRAIGHT_COST`] and diagonal steps
//! [`DIAGONAL_COST`], and reports every cell it settled along the way.
//!
//! ```
//! use gridnav::{Grid, GridPos, PathFinder};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_crossable(2, 2, false);
//!
//! let result = PathFinder::new().compute(&grid, GridPos::new(0, 2), GridPos::new(4, 2), 100.0);
//! assert!(result.is_found());
//! assert!(!result.cells.contains(&GridPos::new(2, 2)));
//! ```

pub mod errors;
pub mod geometry;
pub mod grid;
pub mod graph_algos;
mod collections;

pub use errors::GridError;
pub use geometry::{cell_center, octile_distance, GridPos, Point};
pub use grid::{Grid, GridCell};
pub use graph_algos::a_star::{
    compute, heuristic, path_cost, step_cost, PathFinder, SearchResult, DIAGONAL_COST, DIRECTIONS,
    STRAIGHT_COST,
};
pub use graph_algos::frontier::FrontierKind;
