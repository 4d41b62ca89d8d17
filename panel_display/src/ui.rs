// ui.rs - egui window that shows the strip's latched frame at each pixel's place

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::error;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};

use serpentine_life::{Driver, MemoryStrip, PATTERNS, Rgb, Tick};

pub struct PanelApp {
    driver: Driver<MemoryStrip, SmallRng>,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    selected_pattern: usize,
    last_tick: Option<Tick>,
    device_error: Option<String>,
}

impl PanelApp {
    pub fn new(driver: Driver<MemoryStrip, SmallRng>, update_interval: Duration) -> Self {
        Self {
            driver,
            is_running: true,
            last_update: Instant::now(),
            update_interval,
            selected_pattern: 0,
            last_tick: None,
            device_error: None,
        }
    }

    fn tick(&mut self) {
        match self.driver.tick() {
            Ok(tick) => self.last_tick = Some(tick),
            Err(err) => self.fail(err),
        }
    }

    fn reseed(&mut self, pattern_index: Option<usize>) {
        let grid = self.driver.engine().grid();
        let seed = pattern_index.and_then(|index| PATTERNS.get(index)).map(|pattern| {
            let span = pattern.to_seed((0, 0));
            pattern.to_seed((
                grid.width().saturating_sub(span.width()) / 2,
                grid.height().saturating_sub(span.height()) / 2,
            ))
        });
        if let Err(err) = self.driver.reseed(seed.as_ref()) {
            self.fail(err);
        }
        self.last_tick = None;
    }

    fn fail(&mut self, err: serpentine_life::Error) {
        error!("{err}");
        self.device_error = Some(err.to_string());
        self.is_running = false;
    }
}

fn to_color32(color: Rgb) -> Color32 {
    let (r, g, b): (u8, u8, u8) = color.into();
    Color32::from_rgb(r, g, b)
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.tick();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Serpentine Life Panel");

            ui.horizontal(|ui| {
                let can_run = self.device_error.is_none();
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.add_enabled(can_run, egui::Button::new(button_text)).clicked() {
                    self.is_running = !self.is_running;
                    self.last_update = Instant::now();
                }

                if ui.add_enabled(can_run && !self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.tick();
                }

                if ui.add_enabled(can_run, egui::Button::new("🎲 Random")).clicked() {
                    self.reseed(None);
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

                if ui.add_enabled(can_run, egui::Button::new("Apply Pattern")).clicked() {
                    self.reseed(Some(self.selected_pattern));
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                let palette = *self.driver.palette();
                for (name, color) in [
                    ("Dead", palette.dead),
                    ("Alive", palette.alive),
                    ("Dying", palette.dying),
                    ("Born", palette.born),
                    ("Forecast", palette.forecast),
                ] {
                    ui.label(name);
                    egui::widgets::color_picker::show_color(ui, to_color32(color), Vec2::splat(14.0));
                }
            });

            ui.separator();

            if let Some(message) = &self.device_error {
                ui.colored_label(Color32::RED, format!("Panel stopped: {message}"));
                ui.separator();
            }

            // Each pixel is drawn from the strip slot the snake wiring puts under it.
            let surface = self.driver.surface();
            let grid = surface.grid();
            let shown = surface.device().shown();

            let spacing = 0.5;
            let box_size = (760.0 / grid.width().max(grid.height()) as f32 - spacing).clamp(4.0, 40.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * grid.width() as f32 - spacing,
                (box_size + spacing) * grid.height() as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut hovered = None;
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    let slot = surface.mapper().index(x, y);
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * (box_size + spacing),
                            start_pos.y + y as f32 * (box_size + spacing),
                        ),
                        Vec2::splat(box_size),
                    );

                    painter.rect_filled(rect, 1.0, to_color32(shown[slot]));
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    if response.hover_pos().is_some_and(|pos| rect.contains(pos)) {
                        hovered = Some((x, y, slot));
                    }
                }
            }

            ui.separator();

            let engine = self.driver.engine();
            let population = engine.population();
            let cells = grid.cell_count();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.driver.generation()));
                ui.label(format!("Live cells: {population}"));
                ui.label(format!("Population: {:.1}%", population as f32 / cells as f32 * 100.0));
                ui.label(format!("Reseeds: {}", self.driver.reseeds()));
                if let Some(Tick::Reseeded(reason)) = self.last_tick {
                    ui.label(format!("Last reseed: {reason:?}"));
                }
            });

            if let Some((x, y, slot)) = hovered {
                ui.label(format!(
                    "cell ({x}, {y}) -> strip slot {slot}, {:?}",
                    engine.classify(x, y)
                ));
            }
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}
