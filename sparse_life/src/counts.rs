// counts.rs - Neighbor counting and count inversion

use std::collections::hash_map;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use crate::{Cell, Generation};

/// Live-neighbor count for every cell adjacent to at least one live cell.
///
/// Cells with no live neighbors are never stored; `get` reports them as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborCountMap {
    counts: HashMap<Cell, u8>,
}

impl NeighborCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_generation(generation: &Generation) -> Self {
        let mut map = Self::new();
        map.add_cells(generation.iter().copied());
        map
    }

    /// Credit each listed live cell to its 8 neighbors.
    pub fn add_cells<I: IntoIterator<Item = Cell>>(&mut self, live: I) {
        for cell in live {
            for neighbor in cell.neighbors() {
                *self.counts.entry(neighbor).or_insert(0) += 1;
            }
        }
    }

    /// Sum another partial map into this one.
    pub fn merge(&mut self, other: NeighborCountMap) {
        if self.counts.len() < other.counts.len() {
            let mine = std::mem::replace(&mut self.counts, other.counts);
            self.merge_counts(mine);
        } else {
            self.merge_counts(other.counts);
        }
    }

    fn merge_counts(&mut self, other: HashMap<Cell, u8>) {
        for (cell, n) in other {
            *self.counts.entry(cell).or_insert(0) += n;
        }
    }

    pub fn get(&self, cell: &Cell) -> u8 {
        self.counts.get(cell).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Cell, u8> {
        self.counts.iter()
    }
}

impl IntoIterator for NeighborCountMap {
    type Item = (Cell, u8);
    type IntoIter = hash_map::IntoIter<Cell, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Cells grouped by how many live neighbors they have.
///
/// Only counts that actually occur are keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountToCellsMap {
    by_count: BTreeMap<u8, HashSet<Cell>>,
}

impl CountToCellsMap {
    pub fn from_counts(counts: NeighborCountMap) -> Self {
        let mut by_count: BTreeMap<u8, HashSet<Cell>> = BTreeMap::new();
        for (cell, n) in counts {
            by_count.entry(n).or_default().insert(cell);
        }
        Self { by_count }
    }

    /// Cells with exactly `count` live neighbors; empty when none do.
    pub fn cells(&self, count: u8) -> &HashSet<Cell> {
        static EMPTY: OnceLock<HashSet<Cell>> = OnceLock::new();
        self.by_count
            .get(&count)
            .unwrap_or_else(|| EMPTY.get_or_init(HashSet::new))
    }

    /// Counts that occur, ascending.
    pub fn counts(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_count.keys().copied()
    }
}

impl From<NeighborCountMap> for CountToCellsMap {
    fn from(counts: NeighborCountMap) -> Self {
        Self::from_counts(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(cells: &[(i64, i64)]) -> Generation {
        cells.iter().collect()
    }

    #[test]
    fn single_cell_credits_its_neighbors_only() {
        let counts = NeighborCountMap::from_generation(&live(&[(0, 0)]));
        assert_eq!(counts.len(), 8);
        assert!(counts.iter().all(|(_, &n)| n == 1));
        // the live cell itself has no entry and reads as zero
        assert_eq!(counts.get(&Cell::new(0, 0)), 0);
        assert_eq!(counts.get(&Cell::new(40, 40)), 0);
    }

    #[test]
    fn counts_sum_over_live_neighbors() {
        let counts = NeighborCountMap::from_generation(&live(&[(-1, 0), (0, 0), (1, 0)]));
        assert_eq!(counts.get(&Cell::new(0, 0)), 2);
        assert_eq!(counts.get(&Cell::new(0, 1)), 3);
        assert_eq!(counts.get(&Cell::new(0, -1)), 3);
        assert_eq!(counts.get(&Cell::new(-1, 0)), 1);
        assert_eq!(counts.get(&Cell::new(2, 1)), 1);
    }

    #[test]
    fn no_count_exceeds_eight() {
        let full: Vec<(i64, i64)> = (-2..=2).flat_map(|x| (-2..=2).map(move |y| (x, y))).collect();
        let counts = NeighborCountMap::from_generation(&live(&full));
        assert_eq!(counts.get(&Cell::new(0, 0)), 8);
        assert!(counts.iter().all(|(_, &n)| n <= 8));
    }

    #[test]
    fn merge_matches_single_pass() {
        let all = live(&[(0, 0), (1, 0), (2, 2), (5, 5), (-3, 1)]);
        let mut left = NeighborCountMap::new();
        left.add_cells([Cell::new(0, 0), Cell::new(1, 0)]);
        let mut right = NeighborCountMap::new();
        right.add_cells([Cell::new(2, 2), Cell::new(5, 5), Cell::new(-3, 1)]);
        left.merge(right);
        assert_eq!(left, NeighborCountMap::from_generation(&all));
    }

    #[test]
    fn inversion_groups_cells_by_count() {
        let counts = NeighborCountMap::from_generation(&live(&[(-1, 0), (0, 0), (1, 0)]));
        let stats = CountToCellsMap::from_counts(counts);
        assert_eq!(stats.counts().collect::<Vec<_>>(), vec![1, 2, 3]);
        let threes: HashSet<Cell> = [Cell::new(0, -1), Cell::new(0, 1)].into_iter().collect();
        assert_eq!(stats.cells(3), &threes);
        assert_eq!(stats.cells(2).len(), 5);
    }

    #[test]
    fn missing_counts_are_empty_sets() {
        let stats = CountToCellsMap::from_counts(NeighborCountMap::new());
        assert!(stats.cells(3).is_empty());
        assert_eq!(stats.counts().count(), 0);
    }
}
