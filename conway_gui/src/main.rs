// main.rs - Conway's Game of Life on an unbounded plane, egui viewer
// Generations are sparse sets; the window shows a 50x50 view that can be panned.

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};

use sparse_life::coro::evolve_concurrent;
use sparse_life::patterns::{self, random_soup};
use sparse_life::{Cell, Game, Generation};
use tracing::{info, warn};

mod ui; // Drawing and controls

pub const VIEW_SIZE: i64 = 50; // Visible cells per side
const CHUNK_SIZE: usize = 64;  // Live cells per counting task

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app = GameOfLife::new()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sparse Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}

pub struct GameOfLife {
    pub game: Game,
    pub view_origin: Cell,     // Plane cell shown in the top-left corner
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    runtime: tokio::runtime::Runtime,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        let mut app = Self {
            game: Game::new(Generation::new()),
            view_origin: Cell::new(-VIEW_SIZE / 2, -VIEW_SIZE / 2),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            runtime,
            random_seed: 0,
        };
        app.apply_selected_pattern();
        Ok(app)
    }

    /// Offset that puts `shape` in the middle of the current view.
    fn centering_offset(&self, shape: &Generation) -> (i64, i64) {
        match shape.bounds() {
            Some(b) => (
                self.view_origin.x
                    .wrapping_add(VIEW_SIZE.wrapping_sub(b.width() as i64) / 2)
                    .wrapping_sub(b.min.x),
                self.view_origin.y
                    .wrapping_add(VIEW_SIZE.wrapping_sub(b.height() as i64) / 2)
                    .wrapping_sub(b.min.y),
            ),
            None => (0, 0),
        }
    }
}

/// Actions the UI module drives
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, cell: Cell);
    fn pan(&mut self, dx: i64, dy: i64);
    fn center_view(&mut self);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        let next = self
            .runtime
            .block_on(evolve_concurrent(self.game.generation(), CHUNK_SIZE));

        match next {
            Ok(next) => {
                let tick = self.game.advance(next);
                if tick.cycle {
                    info!(generation = tick.number, population = tick.population, "cycle detected, pausing");
                    self.is_running = false;
                }
            }
            Err(err) => {
                warn!(error = %err, "generation update failed, pausing");
                self.is_running = false;
            }
        }
    }

    fn clear_grid(&mut self) {
        self.game.reset(Generation::new());
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let shape = pattern.generation();
            let (dx, dy) = self.centering_offset(&shape);
            self.game.reset(shape.translate(dx, dy));
        }
    }

    fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        let soup = random_soup(self.random_seed, VIEW_SIZE as u32, VIEW_SIZE as u32);
        self.game.reset(soup.translate(self.view_origin.x, self.view_origin.y));
    }

    fn toggle_cell(&mut self, cell: Cell) {
        self.game.toggle(cell);
    }

    fn pan(&mut self, dx: i64, dy: i64) {
        self.view_origin = self.view_origin.offset(dx, dy);
    }

    fn center_view(&mut self) {
        if let Some(b) = self.game.generation().bounds() {
            // wrapping: a generation may straddle the i64 edge
            let mid_x = b.min.x.wrapping_add((b.width() / 2) as i64);
            let mid_y = b.min.y.wrapping_add((b.height() / 2) as i64);
            self.view_origin = Cell::new(mid_x, mid_y).offset(-VIEW_SIZE / 2, -VIEW_SIZE / 2);
        }
    }
}
