// main.rs - Desktop front end: renders the session grid and forwards user intents

use eframe::egui;
use egui::Color32;
use life_engine::{Simulation, SimulationConfig};
use tokio::runtime::Runtime;

mod ui;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 900.0;

pub const CELL_SIZE: f32 = 20.0; // Each cell is a square of this many points
pub const HEADER_HEIGHT: f32 = 150.0; // Controls above and statistics below the grid
pub const SIDE_MARGIN: f32 = 16.0;

/// Grid size that fits a window of the given size. Too small a window gives
/// negative counts, which the engine rejects.
pub fn grid_dimensions(width: f32, height: f32) -> (i64, i64) {
    let rows = ((height - HEADER_HEIGHT) / CELL_SIZE).floor() as i64;
    let cols = ((width - SIDE_MARGIN) / CELL_SIZE).floor() as i64;
    (rows, cols)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let (rows, cols) = grid_dimensions(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut config = SimulationConfig::new().with_dimensions(rows, cols);
    if let Some(seed) = std::env::var("LIFE_SEED").ok().and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    log::info!("window {WINDOW_WIDTH}x{WINDOW_HEIGHT} gives a {rows}x{cols} grid");
    let runtime = Runtime::new()?;
    let sim = Simulation::new(config, runtime.handle().clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeView::new(cc, sim, runtime))),
    )?;
    Ok(())
}

pub struct LifeView {
    sim: Simulation,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    /// Last rejected intent, shown under the controls.
    pub status: Option<String>,
    // Dropped last so the session stops before its runtime goes away.
    _runtime: Runtime,
}

impl LifeView {
    fn new(cc: &eframe::CreationContext<'_>, sim: Simulation, runtime: Runtime) -> Self {
        // Repaint whenever the engine publishes, instead of polling every frame.
        let mut updates = sim.subscribe();
        let ctx = cc.egui_ctx.clone();
        runtime.spawn(async move {
            while updates.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            sim,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            status: None,
            _runtime: runtime,
        }
    }
}
