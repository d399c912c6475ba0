// config.rs - Command line configuration

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sparse_life::Generation;
use sparse_life::patterns::{Pattern, random_soup};

use crate::error::ConfigError;
use crate::render::Viewport;

#[derive(Debug, Clone, Parser)]
#[command(name = "conway", about = "Conway's Game of Life on an unbounded plane")]
#[command(version)]
pub struct Config {
    /// Preset shape to start from
    #[arg(short, long, default_value = "glider")]
    pub pattern: String,

    /// Plaintext pattern file (`O` live, `.` dead, `!` comments); overrides --pattern
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Start from a random soup filling the viewport, seeded with this value
    #[arg(long, conflicts_with = "file")]
    pub random: Option<u64>,

    /// Delay between generations in milliseconds
    #[arg(long, env = "CONWAY_DELAY_MS", default_value_t = 100)]
    pub delay_ms: u64,

    /// Stop after this many generations (runs until interrupted otherwise)
    #[arg(short = 'n', long)]
    pub generations: Option<u64>,

    /// Stop once a generation repeats one of the last 10
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Viewport width in cells
    #[arg(long, default_value_t = 50)]
    pub width: u16,

    /// Viewport height in cells
    #[arg(long, default_value_t = 50)]
    pub height: u16,

    /// Plane x coordinate shown in the left-most column
    #[arg(long, default_value_t = -25, allow_hyphen_values = true)]
    pub origin_x: i64,

    /// Plane y coordinate shown in the top row
    #[arg(long, default_value_t = -25, allow_hyphen_values = true)]
    pub origin_y: i64,

    /// Number of tokio tasks sharing the neighbor count (1 counts inline)
    #[arg(long, default_value_t = 1)]
    pub workers: usize,

    /// Print the preset names and exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroViewport { width: self.width, height: self.height });
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.file.is_none() && self.random.is_none() && Pattern::by_name(&self.pattern).is_none() {
            return Err(ConfigError::UnknownPattern { name: self.pattern.clone() });
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            width: self.width,
            height: self.height,
        }
    }

    /// The starting generation: file, then random soup, then preset.
    /// Files and presets are centered on the middle of the viewport.
    pub fn initial_generation(&self) -> Result<Generation, ConfigError> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
            let parsed: Generation = text
                .parse()
                .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
            return Ok(self.center(&parsed));
        }
        if let Some(seed) = self.random {
            let soup = random_soup(seed, u32::from(self.width), u32::from(self.height));
            return Ok(soup.translate(self.origin_x, self.origin_y));
        }
        let pattern = Pattern::by_name(&self.pattern)
            .ok_or_else(|| ConfigError::UnknownPattern { name: self.pattern.clone() })?;
        Ok(self.center(&pattern.generation()))
    }

    fn center(&self, shape: &Generation) -> Generation {
        let Some(bounds) = shape.bounds() else {
            return shape.clone();
        };
        let mid_x = self.origin_x.saturating_add(i64::from(self.width / 2));
        let mid_y = self.origin_y.saturating_add(i64::from(self.height / 2));
        let half_w = (bounds.width() / 2) as i64;
        let half_h = (bounds.height() / 2) as i64;
        shape.translate(
            mid_x.wrapping_sub(bounds.min.x).wrapping_sub(half_w),
            mid_y.wrapping_sub(bounds.min.y).wrapping_sub(half_h),
        )
    }
}
