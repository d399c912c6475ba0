//! Conway's Game of Life on an unbounded plane.
//!
//! A generation is a sparse set of live [`Cell`]s; there is no grid. One step
//! credits every live cell to its 8 neighbors, groups cells by that count,
//! and keeps the cells with 3 live neighbors plus the live cells with 2:
//!
//! ```
//! use sparse_life::{evolve, Generation};
//!
//! let blinker: Vec<(i64, i64)> = vec![(-1, 0), (0, 0), (1, 0)];
//! let next = evolve(blinker.clone());
//! assert_eq!(next, [(0, -1), (0, 0), (0, 1)].iter().collect::<Generation>());
//! assert_eq!(evolve(&next), blinker.iter().collect::<Generation>());
//! ```

mod cell;
mod counts;
mod game;
mod generation;
mod history;
mod rule;

pub mod coro;
pub mod patterns;

pub use cell::{Cell, Neighbors};
pub use counts::{CountToCellsMap, NeighborCountMap};
pub use game::{Game, Render, Tick};
pub use generation::{Bounds, Generation, ParseError};
pub use history::CycleDetector;
pub use rule::{apply_rule, evolve, next_generation};
