use num_traits::{Num, Signed};


/// Octile distance
/// Cost of the cheapest 8-connected walk on an open grid, given per-step costs
pub fn octile_distance<T>(x1: T, y1: T, x2: T, y2: T, straight: T, diagonal: T) -> T
where 
    T: Num + Copy + Signed + Ord,
    {
    let dx = (x1 - x2).abs();
    let dy = (y1 - y2).abs();
    let (long, short) = if dx > dy { (dx, dy) } else { (dy, dx) };
    straight * (long - short) + diagonal * short
}


/// 2D Point in world space
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}


/// Integer cell coordinates on a grid
/// Signed so that neighbor offsets can step off the grid and be rejected by bounds checks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// True if `other` is one of the 8 cells surrounding `self`
    pub fn is_adjacent(self, other: GridPos) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}


/// World-space center of a cell: (index + 0.5) * cell_size per axis
pub fn cell_center(pos: GridPos, cell_size: f64) -> Point {
    Point {
        x: (pos.x as f64 + 0.5) * cell_size,
        y: (pos.y as f64 + 0.5) * cell_size,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octile_distance() {
        assert_eq!(octile_distance(0, 0, 3, 4, 10, 14), 52);
        assert_eq!(octile_distance(-2, 5, 1, 1, 10, 14), 52);
        assert_eq!(octile_distance(0, 0, 4, 0, 10, 14), 40);
        assert_eq!(octile_distance(0, 0, 4, 4, 10, 14), 56);
        assert_eq!(octile_distance(2, 2, 2, 2, 10, 14), 0);
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(cell_center(GridPos::new(0, 0), 100.0), Point::new(50.0, 50.0));
        assert_eq!(cell_center(GridPos::new(3, 1), 2.0), Point::new(7.0, 3.0));
    }

    #[test]
    fn test_adjacency() {
        let p = GridPos::new(2, 2);
        assert!(p.is_adjacent(GridPos::new(1, 1)));
        assert!(p.is_adjacent(GridPos::new(2, 3)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(GridPos::new(4, 2)));
    }
}
