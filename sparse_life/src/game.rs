// game.rs - A running simulation: current generation, counter and history

use tracing::trace;

use crate::{Cell, CycleDetector, Generation};

/// Consumer of generations, called once per step by a driving loop.
pub trait Render {
    type Error;

    fn render(&mut self, number: u64, generation: &Generation) -> Result<(), Self::Error>;
}

/// Outcome of a single [`Game::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub number: u64,
    pub population: usize,
    pub cycle: bool, // generation repeats one of the last 10
}

#[derive(Debug, Clone)]
pub struct Game {
    generation: Generation,
    number: u64,
    history: CycleDetector,
}

impl Game {
    pub fn new(start: Generation) -> Self {
        let mut history = CycleDetector::new();
        history.observe(&start);
        Self { generation: start, number: 0, history }
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn population(&self) -> usize {
        self.generation.len()
    }

    /// Advance one generation.
    pub fn tick(&mut self) -> Tick {
        let next = self.generation.step();
        self.advance(next)
    }

    /// Install a generation computed elsewhere (e.g. concurrently) as the
    /// next step.
    pub fn advance(&mut self, next: Generation) -> Tick {
        self.generation = next;
        self.number += 1;
        let cycle = self.history.observe(&self.generation);
        let tick = Tick { number: self.number, population: self.generation.len(), cycle };
        trace!(generation = tick.number, population = tick.population, cycle, "tick");
        tick
    }

    /// Start over from a new generation.
    pub fn reset(&mut self, start: Generation) {
        *self = Self::new(start);
    }

    /// Flip one cell of the current generation. Edits invalidate the cycle
    /// history.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        let alive = self.generation.toggle(cell);
        self.history.clear();
        self.history.observe(&self.generation);
        alive
    }
}
