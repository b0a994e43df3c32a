// ui.rs - Draws the current snapshot and turns clicks into session requests

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::PATTERNS;

use crate::{CELL_SIZE, LifeView};

/// Cell under a point given relative to the grid's top-left corner.
pub fn cell_at(offset: Vec2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / CELL_SIZE) as usize;
    let col = (offset.x / CELL_SIZE) as usize;
    (row < rows && col < cols).then_some((row, col))
}

impl eframe::App for LifeView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.sim.snapshot();
        let grid = &snapshot.grid;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let running = self.sim.is_running();
                let button_text = if running { "⏸ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if running {
                        self.sim.stop();
                    } else {
                        self.sim.start();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.sim.request_clear();
                    self.status = None;
                }

                if ui.button("🎲 Random").clicked() {
                    let p = self.sim.default_alive_probability();
                    self.status = self.sim.request_random(p).err().map(|e| e.to_string());
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    let pattern = &PATTERNS[self.selected_pattern];
                    self.status = self.sim.request_pattern(pattern).err().map(|e| e.to_string());
                }

                ui.separator();
                ui.label(format!("Generation: {}", snapshot.generation));
            });

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.colored_label(Color32::RED, status.as_str());
                }
            });

            ui.separator();

            let (rows, cols) = (grid.rows(), grid.cols());
            let total_size = Vec2::new(cols as f32 * CELL_SIZE, rows as f32 * CELL_SIZE);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            for (row, cells) in grid.iter_rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE),
                        Vec2::splat(CELL_SIZE),
                    );
                    let color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 0.0, color);
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(170)));
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((row, col)) = cell_at(pos - origin, rows, cols) {
                        self.status = self.sim.request_toggle(row, col).err().map(|e| e.to_string());
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = rows * cols;
            let live_cells = grid.live_count();
            let population = if total == 0 {
                0.0
            } else {
                live_cells as f32 / total as f32 * 100.0
            };
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", population));
            });
        });
    }
}
