// config.rs - Simulation configuration

use std::time::Duration;

use crate::error::ConfigError;
use crate::error::GridError;
use crate::grid::Dimensions;

// --- Defaults ---
pub const DEFAULT_ROWS: i64 = 40;
pub const DEFAULT_COLS: i64 = 40;
pub const DEFAULT_TICK_MS: u64 = 100; // Delay between generations
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3; // Sparse enough not to die of overcrowding at once

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: i64,
    pub cols: i64,
    pub tick: Duration,
    pub alive_probability: f64,
    /// Seed for random grids; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(mut self, rows: i64, cols: i64) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every field and returns the grid dimensions for the session.
    pub fn validate(&self) -> Result<Dimensions, ConfigError> {
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(GridError::InvalidProbability(self.alive_probability).into());
        }
        Ok(Dimensions::new(self.rows, self.cols)?)
    }
}
