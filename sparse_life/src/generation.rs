// generation.rs - The set of live cells

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::collections::hash_set;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

use crate::Cell;

/// Every live cell of one step. Always finite, never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Cell>,
}

/// Inclusive bounding box of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    /// Cells per row, saturating at `u64::MAX` for a box spanning every `i64`.
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Rows, saturating like [`Bounds::width`].
    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of cells inside the box.
    pub fn area(&self) -> u128 {
        u128::from(self.width()) * u128::from(self.height())
    }
}

/// Largest bounding box `Display` draws as a grid.
const MAX_DRAWN_AREA: u128 = 1 << 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedChar { line: usize, column: usize, found: char },
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cells in `Cell` order.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells.iter();
        let first = *cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some(Bounds { min, max })
    }

    /// Returns true if the cell was not already alive.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Returns true if the cell was alive.
    pub fn remove(&mut self, cell: &Cell) -> bool {
        self.cells.remove(cell)
    }

    /// Flip a cell; returns its new state.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    pub fn translate(&self, dx: i64, dy: i64) -> Generation {
        self.cells.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Hash of the set that does not depend on iteration order.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.sorted().hash(&mut hasher);
        hasher.finish()
    }

    /// The next generation.
    pub fn step(&self) -> Generation {
        crate::next_generation(self)
    }

    pub(crate) fn as_set(&self) -> &HashSet<Cell> {
        &self.cells
    }
}

impl From<HashSet<Cell>> for Generation {
    fn from(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }
}

impl<C: Into<Cell>> FromIterator<C> for Generation {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self { cells: iter.into_iter().map(Into::into).collect() }
    }
}

impl<C: Into<Cell>> Extend<C> for Generation {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.cells.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Generation {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Plaintext pattern: `!` starts a comment line, `O` `*` `#` are live,
/// `.` and space are dead. Row `r`, column `c` becomes cell `(c, r)`.
impl FromStr for Generation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = HashSet::new();
        let rows = s.lines().filter(|line| !line.starts_with('!'));
        for (row, line) in rows.enumerate() {
            for (col, ch) in line.trim_end().chars().enumerate() {
                match ch {
                    'O' | '*' | '#' => {
                        cells.insert(Cell::new(col as i64, row as i64));
                    }
                    '.' | ' ' => {}
                    found => {
                        return Err(ParseError::UnexpectedChar {
                            line: row + 1,
                            column: col + 1,
                            found,
                        });
                    }
                }
            }
        }
        Ok(Self { cells })
    }
}

/// Renders the bounding box in the same plaintext format `FromStr` reads.
/// Boxes larger than 2^24 cells are listed as `!` comment lines instead,
/// one `x y` pair per line, which parse back as an empty generation.
impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bounds) = self.bounds() else {
            return Ok(());
        };
        if bounds.area() > MAX_DRAWN_AREA {
            writeln!(f, "!{} cells spanning {}x{}", self.len(), bounds.width(), bounds.height())?;
            for cell in self.sorted() {
                writeln!(f, "!{} {}", cell.x, cell.y)?;
            }
            return Ok(());
        }
        for y in bounds.min.y..=bounds.max.y {
            for x in bounds.min.x..=bounds.max.x {
                let glyph = if self.contains(&Cell::new(x, y)) { 'O' } else { '.' };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let g: Generation = [(0, 0), (1, 1), (0, 0), (1, 1)].into_iter().collect();
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let a: Generation = [(0, 0), (5, -3), (2, 9)].into_iter().collect();
        let b: Generation = [(2, 9), (0, 0), (5, -3)].into_iter().collect();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), a.translate(1, 0).fingerprint());
    }

    #[test]
    fn toggle_flips_state() {
        let mut g = Generation::new();
        assert!(g.toggle(Cell::new(4, 4)));
        assert!(g.contains(&Cell::new(4, 4)));
        assert!(!g.toggle(Cell::new(4, 4)));
        assert!(g.is_empty());
    }

    #[test]
    fn bounds_cover_every_cell() {
        let g: Generation = [(-2, 5), (3, -1), (0, 0)].into_iter().collect();
        let b = g.bounds().expect("non-empty");
        assert_eq!(b.min, Cell::new(-2, -1));
        assert_eq!(b.max, Cell::new(3, 5));
        assert_eq!((b.width(), b.height()), (6, 7));
        assert_eq!(Generation::new().bounds(), None);
    }

    #[test]
    fn bounds_across_the_whole_axis_saturate() {
        let g: Generation = [Cell::new(i64::MIN, 0), Cell::new(i64::MAX, 0)].into_iter().collect();
        let b = g.bounds().expect("non-empty");
        assert_eq!(b.width(), u64::MAX);
        assert_eq!(b.height(), 1);
        assert_eq!(b.area(), u128::from(u64::MAX));

        let tall: Generation = [Cell::new(0, i64::MIN), Cell::new(0, i64::MAX)].into_iter().collect();
        assert_eq!(tall.bounds().expect("non-empty").height(), u64::MAX);
    }

    #[test]
    fn display_lists_cells_of_oversized_boxes() {
        let g: Generation = [Cell::new(i64::MIN, 0), Cell::new(i64::MAX, 0)].into_iter().collect();
        let text = g.to_string();
        assert_eq!(
            text,
            format!("!2 cells spanning {}x1\n!{} 0\n!{} 0\n", u64::MAX, i64::MIN, i64::MAX)
        );
        assert!(text.parse::<Generation>().expect("comments only").is_empty());
    }

    #[test]
    fn parses_plaintext_glider() {
        let text = "!Name: Glider\n.O.\n..O\nOOO\n";
        let g: Generation = text.parse().expect("valid pattern");
        let expected: Generation = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)].into_iter().collect();
        assert_eq!(g, expected);
    }

    #[test]
    fn rejects_unknown_glyphs() {
        let err = "..\n.x\n".parse::<Generation>().unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { line: 2, column: 2, found: 'x' });
    }

    #[test]
    fn display_round_trips_through_parse() {
        let g: Generation = [(0, 0), (2, 0), (1, 1)].into_iter().collect();
        assert_eq!(g.to_string(), "O.O\n.O.\n");
        assert_eq!(g.to_string().parse::<Generation>(), Ok(g));
    }
}
