//! Conway's Game of Life on a bounded grid.
//!
//! Cells beyond the edges count as permanently dead. [`step::advance`] is the
//! pure one-generation step; [`Simulation`] owns the current grid and drives
//! it on a tokio timer.

pub mod config;
pub mod error;
pub mod factory;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod rules;
pub mod simulation;
pub mod step;

pub use config::SimulationConfig;
pub use error::{ConfigError, GridError};
pub use factory::GridFactory;
pub use grid::{Dimensions, Grid};
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, PATTERNS};
pub use rules::next_state;
pub use simulation::{RunState, Simulation, Snapshot};
pub use step::advance;
