// simulation.rs - Session state and the timed stepping loop
//
// The session owns the current grid and the run flag. While running, a tokio
// task sleeps for one tick, checks the flag, advances one generation and
// publishes it. Stopping only clears the flag: the next scheduled wake-up
// observes it and ends the chain without stepping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::SimulationConfig;
use crate::error::{ConfigError, GridError};
use crate::factory::GridFactory;
use crate::grid::{Dimensions, Grid};
use crate::patterns::Pattern;
use crate::step::advance;

/// No run is active.
const IDLE: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// A published generation, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub grid: Arc<Grid>,
}

struct Board {
    grid: Arc<Grid>,
    generation: u64,
    factory: GridFactory,
}

struct Shared {
    board: Mutex<Board>,
    // Id of the running chain, or IDLE. Each start gets a fresh id so a
    // wake-up left over from an earlier run can tell it is stale.
    active_run: AtomicU64,
    next_run: AtomicU64,
    publisher: watch::Sender<Snapshot>,
}

impl Shared {
    fn board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_active(&self, run: u64) -> bool {
        self.active_run.load(Ordering::Acquire) == run
    }

    /// Advances one generation if `run` is still the active chain.
    /// Returns whether a step happened.
    fn step_if_active(&self, run: u64) -> bool {
        let mut board = self.board();
        if !self.is_active(run) {
            return false;
        }
        board.grid = Arc::new(advance(&board.grid));
        board.generation += 1;
        debug!(
            "generation {} published ({} live)",
            board.generation,
            board.grid.live_count()
        );
        self.publish(&board);
        true
    }

    fn replace(&self, board: &mut Board, grid: Grid, generation: u64) {
        board.grid = Arc::new(grid);
        board.generation = generation;
        self.publish(board);
    }

    fn publish(&self, board: &Board) {
        self.publisher.send_replace(Snapshot {
            generation: board.generation,
            grid: Arc::clone(&board.grid),
        });
    }
}

/// One simulation session: the current grid, the run state, and the
/// scheduling of the stepping loop on a tokio runtime.
///
/// Edits are accepted while running. A step holds the grid lock for the
/// whole compute-and-swap, so an edit either lands before a step (and is
/// its input) or after it; a step never overwrites an edit.
pub struct Simulation {
    shared: Arc<Shared>,
    dims: Dimensions,
    tick: Duration,
    alive_probability: f64,
    runtime: Handle,
}

impl Simulation {
    /// Creates an idle session with an empty grid. Loop tasks are spawned on `runtime`.
    pub fn new(config: SimulationConfig, runtime: Handle) -> Result<Self, ConfigError> {
        let dims = config.validate()?;
        let grid = Arc::new(Grid::empty(dims));
        let (publisher, _) = watch::channel(Snapshot {
            generation: 0,
            grid: Arc::clone(&grid),
        });

        info!(
            "simulation session {}x{} created (tick {:?})",
            dims.rows, dims.cols, config.tick
        );

        Ok(Self {
            shared: Arc::new(Shared {
                board: Mutex::new(Board {
                    grid,
                    generation: 0,
                    factory: GridFactory::new(config.seed),
                }),
                active_run: AtomicU64::new(IDLE),
                next_run: AtomicU64::new(IDLE),
                publisher,
            }),
            dims,
            tick: config.tick,
            alive_probability: config.alive_probability,
            runtime,
        })
    }

    /// Idle -> Running: steps once right away, then once per tick until stopped.
    /// Does nothing if already running.
    pub fn start(&self) {
        let run = self.shared.next_run.fetch_add(1, Ordering::AcqRel) + 1;
        if self
            .shared
            .active_run
            .compare_exchange(IDLE, run, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("start ignored, simulation already running");
            return;
        }

        info!("simulation started (run {run})");
        self.shared.step_if_active(run);
        self.runtime
            .spawn(run_chain(Arc::clone(&self.shared), run, self.tick));
    }

    /// Running -> Idle. The pending wake-up still fires but will not step.
    pub fn stop(&self) {
        let run = self.shared.active_run.swap(IDLE, Ordering::AcqRel);
        if run != IDLE {
            info!("simulation stopped (run {run})");
        }
    }

    pub fn run_state(&self) -> RunState {
        match self.shared.active_run.load(Ordering::Acquire) {
            IDLE => RunState::Idle,
            _ => RunState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn current_grid(&self) -> Arc<Grid> {
        Arc::clone(&self.shared.board().grid)
    }

    pub fn snapshot(&self) -> Snapshot {
        let board = self.shared.board();
        Snapshot {
            generation: board.generation,
            grid: Arc::clone(&board.grid),
        }
    }

    /// Receiver that sees every newly published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.publisher.subscribe()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn default_alive_probability(&self) -> f64 {
        self.alive_probability
    }

    /// Replaces the grid with an empty one and resets the generation count.
    pub fn request_clear(&self) {
        let mut board = self.shared.board();
        self.shared.replace(&mut board, Grid::empty(self.dims), 0);
        debug!("grid cleared");
    }

    /// Replaces the grid with a random one and resets the generation count.
    pub fn request_random(&self, alive_probability: f64) -> Result<(), GridError> {
        let mut board = self.shared.board();
        let grid = board
            .factory
            .random(self.dims, alive_probability)
            .inspect_err(|e| warn!("random grid rejected: {e}"))?;
        debug!("grid randomized ({} live)", grid.live_count());
        self.shared.replace(&mut board, grid, 0);
        Ok(())
    }

    /// Flips one cell. The generation count is kept.
    pub fn request_toggle(&self, row: usize, col: usize) -> Result<(), GridError> {
        let mut board = self.shared.board();
        let grid = board
            .grid
            .toggle(row, col)
            .inspect_err(|e| warn!("toggle rejected: {e}"))?;
        let generation = board.generation;
        self.shared.replace(&mut board, grid, generation);
        debug!("cell ({row}, {col}) toggled");
        Ok(())
    }

    /// Replaces the grid with `pattern` centered, resetting the generation count.
    pub fn request_pattern(&self, pattern: &Pattern) -> Result<(), GridError> {
        let grid = pattern
            .centered(self.dims)
            .inspect_err(|e| warn!("pattern {} does not fit: {e}", pattern.name))?;
        let mut board = self.shared.board();
        self.shared.replace(&mut board, grid, 0);
        debug!("pattern {} applied", pattern.name);
        Ok(())
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_chain(shared: Arc<Shared>, run: u64, tick: Duration) {
    loop {
        tokio::time::sleep(tick).await;
        if !shared.step_if_active(run) {
            debug!("run {run} woke after stop, loop ends");
            return;
        }
    }
}
