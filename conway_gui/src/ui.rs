// ui.rs - Controls and the panned view onto the plane

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use sparse_life::Cell;
use sparse_life::patterns;

use crate::{GameOfLife, GameOfLifeInterface, VIEW_SIZE};

const PAN_STEP: i64 = 10;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint(); // Ensure continuous updates
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life (unbounded)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.game.number()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                // Show current colors
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Panning
            ui.horizontal(|ui| {
                ui.label("View:");
                if ui.button("◀").clicked() { self.pan(-PAN_STEP, 0); }
                if ui.button("▲").clicked() { self.pan(0, -PAN_STEP); }
                if ui.button("▼").clicked() { self.pan(0, PAN_STEP); }
                if ui.button("▶").clicked() { self.pan(PAN_STEP, 0); }
                if ui.button("Center").clicked() { self.center_view(); }

                ui.separator();

                ui.label(format!(
                    "Top-left: ({}, {})",
                    self.view_origin.x, self.view_origin.y
                ));
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead while paused. The plane has no edges; pan to follow escaping cells.");

            ui.separator();

            // Draw the visible window of the plane
            let box_size = 15.0;
            let spacing = 0.5;
            let view = VIEW_SIZE as usize;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * view as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let clicked_at = if !self.is_running && response.clicked() {
                response.interact_pointer_pos()
            } else {
                None
            };
            let mut toggled = None;

            for display_row in 0..view {
                for display_col in 0..view {
                    let cell = self.view_origin.offset(display_col as i64, display_row as i64);

                    let x = start_pos.x + display_col as f32 * (box_size + spacing);
                    let y = start_pos.y + display_row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(
                        egui::pos2(x, y),
                        Vec2::splat(box_size),
                    );

                    // Choose color based on cell state
                    let cell_color = if self.game.generation().contains(&cell) {
                        self.live_color
                    } else {
                        self.dead_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);

                    // Draw subtle border
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    if clicked_at.is_some_and(|pos| rect.contains(pos)) {
                        toggled = Some(cell);
                    }
                }
            }

            if let Some(cell) = toggled {
                self.toggle_cell(cell);
            }

            ui.separator();

            // Statistics: the whole plane, and what is inside the window
            let population = self.game.population();
            let visible = self
                .game
                .generation()
                .iter()
                .filter(|c| in_view(self.view_origin, **c))
                .count();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", population));
                ui.label(format!("In view: {}", visible));
                ui.label(format!("Off screen: {}", population - visible));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

fn in_view(origin: Cell, cell: Cell) -> bool {
    let dx = cell.x.wrapping_sub(origin.x);
    let dy = cell.y.wrapping_sub(origin.y);
    (0..VIEW_SIZE).contains(&dx) && (0..VIEW_SIZE).contains(&dy)
}
