// cell.rs - Cell coordinates on the unbounded plane

use std::cmp::Ordering;
use std::iter::FusedIterator;

/// Neighbor offsets in row-major order: dx outer, dy inner, (0,0) skipped.
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A unit position on the integer plane. Coordinates may be any `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 cells surrounding this one.
    pub fn neighbors(self) -> Neighbors {
        Neighbors { center: self, next: 0 }
    }

    /// Translate by `(dx, dy)`. Wraps at the `i64` limits instead of panicking.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

// y-major so that sorted cells read like screen rows
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<&(i64, i64)> for Cell {
    fn from(&(x, y): &(i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<&Cell> for Cell {
    fn from(cell: &Cell) -> Self {
        *cell
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

/// Iterator over the 8 neighbors of a cell. Always yields exactly 8 items.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Cell,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let &(dx, dy) = OFFSETS.get(self.next)?;
        self.next += 1;
        Some(self.center.offset(dx, dy))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = OFFSETS.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Neighbors {}
impl FusedIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_are_the_eight_surrounding_cells() {
        let found: HashSet<Cell> = Cell::new(3, -7).neighbors().collect();
        assert_eq!(found.len(), 8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let c = Cell::new(3 + dx, -7 + dy);
                assert_eq!(found.contains(&c), (dx, dy) != (0, 0), "{c:?}");
            }
        }
    }

    #[test]
    fn neighbors_are_row_major_and_restartable() {
        let it = Cell::new(0, 0).neighbors();
        assert_eq!(it.len(), 8);
        let first: Vec<Cell> = it.clone().collect();
        let second: Vec<Cell> = it.collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Cell::new(-1, -1));
        assert_eq!(first[1], Cell::new(-1, 0));
        assert_eq!(first[3], Cell::new(0, -1));
        assert_eq!(first[7], Cell::new(1, 1));
    }

    #[test]
    fn neighbors_at_the_arithmetic_edge_do_not_panic() {
        let corner = Cell::new(i64::MAX, i64::MIN);
        assert_eq!(corner.neighbors().count(), 8);
        assert!(corner.neighbors().any(|c| c == Cell::new(i64::MIN, i64::MAX)));
    }

    #[test]
    fn ordering_is_row_then_column() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(0, 0)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)]);
    }
}
