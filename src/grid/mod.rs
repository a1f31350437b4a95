use crate::errors::GridError;
use crate::geometry::{cell_center, GridPos, Point};


/// Static state of one cell, as seen through a given cell size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub pos: GridPos,
    pub world_position: Point, // Cell center in world space
    pub is_crossable: bool,
}


/// Rectangular occupancy grid
/// Crossability is stored flat and row-major: index = y * width + x
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    width: usize,
    height: usize,
    crossable: Vec<bool>,
}

/// Unchecked wire form, validated through Grid::from_crossability
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    crossable: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_crossability(raw.width, raw.height, raw.crossable)
    }
}

impl Grid {

    /// Create a grid where every cell is crossable
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = Self::cell_count(width, height)?;
        Self::from_crossability(width, height, vec![true; len])
    }

    /// Create a grid from a row-major crossability array
    /// Rejects arrays whose length doesn't match the dimensions
    pub fn from_crossability(width: usize, height: usize, crossable: Vec<bool>) -> Result<Self, GridError> {
        let expected = Self::cell_count(width, height)?;
        if crossable.len() != expected {
            return Err(GridError::DimensionMismatch { expected, actual: crossable.len() });
        }
        Ok(Self { width, height, crossable })
    }

    /// width * height, rejecting empty grids and sides that don't fit i32 coordinates
    fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
        let fits = |side: usize| side > 0 && i32::try_from(side).is_ok();
        if !fits(width) || !fits(height) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        width.checked_mul(height).ok_or(GridError::InvalidDimensions { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.crossable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crossable.is_empty()
    }

    /// Flat index of (x, y)
    /// Caller must ensure the coordinates are in bounds
    pub fn index_of(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Grid coordinates of a flat index
    pub fn pos_of(&self, index: usize) -> GridPos {
        GridPos::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Crossability flag of (x, y)
    /// Caller must ensure the coordinates are in bounds
    pub fn is_crossable(&self, x: i32, y: i32) -> bool {
        self.crossable[self.index_of(x, y)]
    }

    /// Toggle a cell; returns false if (x, y) is outside the grid
    pub fn set_crossable(&mut self, x: i32, y: i32, crossable: bool) -> bool {
        if !self.is_in_bounds(x, y) {
            return false;
        }
        let index = self.index_of(x, y);
        self.crossable[index] = crossable;
        true
    }

    /// Raw row-major crossability flags
    pub fn crossability(&self) -> &[bool] {
        &self.crossable
    }

    /// Cell view at (x, y), or None when out of bounds
    pub fn cell(&self, x: i32, y: i32, cell_size: f64) -> Option<GridCell> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        let pos = GridPos::new(x, y);
        Some(GridCell {
            pos,
            world_position: cell_center(pos, cell_size),
            is_crossable: self.is_crossable(x, y),
        })
    }

    /// All cells in row-major order
    pub fn cells(&self, cell_size: f64) -> impl Iterator<Item = GridCell> + '_ {
        self.crossable.iter().enumerate().map(move |(index, &is_crossable)| {
            let pos = self.pos_of(index);
            GridCell {
                pos,
                world_position: cell_center(pos, cell_size),
                is_crossable,
            }
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_crossable() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(grid.cells(1.0).all(|cell| cell.is_crossable));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(
            Grid::from_crossability(3, 3, vec![true; 8]),
            Err(GridError::DimensionMismatch { expected: 9, actual: 8 })
        );
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::InvalidDimensions { width: usize::MAX, height: 2 })
        );
        assert_eq!(
            Grid::from_crossability(2, usize::MAX, Vec::new()),
            Err(GridError::InvalidDimensions { width: 2, height: usize::MAX })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_dimensions() {
        let bad = serde_json::from_str::<Grid>(r#"{"width":5,"height":5,"crossable":[true,true,true]}"#);
        assert!(bad.is_err());

        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_crossable(1, 1, false);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_index_mapping_is_row_major() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.index_of(0, 0), 0);
        assert_eq!(grid.index_of(4, 0), 4);
        assert_eq!(grid.index_of(0, 1), 5);
        assert_eq!(grid.index_of(3, 2), 13);
        for index in 0..grid.len() {
            let pos = grid.pos_of(index);
            assert_eq!(grid.index_of(pos.x, pos.y), index);
        }
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(5, 4).unwrap();
        assert!(grid.is_in_bounds(0, 0));
        assert!(grid.is_in_bounds(4, 3));
        assert!(!grid.is_in_bounds(5, 0));
        assert!(!grid.is_in_bounds(0, 4));
        assert!(!grid.is_in_bounds(-1, 2));
        assert!(!grid.is_in_bounds(2, -1));
    }

    #[test]
    fn test_set_crossable() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.set_crossable(1, 2, false));
        assert!(!grid.is_crossable(1, 2));
        assert!(!grid.crossability()[7]);
        assert!(!grid.set_crossable(3, 0, false));
    }

    #[test]
    fn test_cell_view() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_crossable(2, 1, false);

        let cell = grid.cell(2, 1, 10.0).unwrap();
        assert_eq!(cell.pos, GridPos::new(2, 1));
        assert_eq!(cell.world_position, Point::new(25.0, 15.0));
        assert!(!cell.is_crossable);

        assert!(grid.cell(3, 1, 10.0).is_none());
    }
}
