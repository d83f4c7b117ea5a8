// gui.rs - egui front end
// Advances the grid whenever the configured interval has elapsed between frames

use std::time::{Duration, Instant};

use anyhow::Result;
use conway::{CycleDetector, GenerationStats, Grid, LifeConfig, PATTERNS, SeedPlan};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

const BOX_SIZE: f32 = 8.0;
const SPACING: f32 = 0.5;

pub fn run(grid: Grid, config: LifeConfig) -> Result<()> {
    let board = board_size(&grid);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.x.max(640.0) + 32.0, board.y + 200.0]),
        ..Default::default()
    };

    let app = LifeApp::new(grid, &config);
    info!("opening window");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}

fn board_size(grid: &Grid) -> Vec2 {
    Vec2::new(
        (BOX_SIZE + SPACING) * grid.columns() as f32 - SPACING,
        (BOX_SIZE + SPACING) * grid.rows() as f32 - SPACING,
    )
}

pub struct LifeApp {
    grid: Grid,
    plan: SeedPlan,
    rng: ChaCha8Rng,
    cycles: CycleDetector,
    stats: GenerationStats,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    pub fn new(grid: Grid, config: &LifeConfig) -> Self {
        let mut cycles = CycleDetector::new();
        cycles.check(&grid);
        Self {
            grid,
            plan: config.seeding.plan(),
            rng: config.seeding.rng(),
            cycles,
            stats: GenerationStats::default(),
            is_running: true,
            last_update: Instant::now(),
            update_interval: config.interval(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }

    fn step(&mut self) {
        self.stats.reset();
        self.grid.advance_generation_with(&mut self.stats);
        if self.cycles.check(&self.grid) {
            info!(generation = self.grid.generation(), "state repeated, pausing");
            self.is_running = false;
        }
    }

    fn reseed(&mut self) {
        self.reset_history();
        self.grid.clear();
        self.grid.seed_random_population_with(self.plan, &mut self.rng, &mut ());
        self.cycles.check(&self.grid);
    }

    fn clear(&mut self) {
        self.reset_history();
        self.grid.clear();
    }

    fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.reset_history();
        if let Err(e) = self.grid.apply_pattern(pattern, &mut ()) {
            warn!("{e}");
        }
        self.cycles.check(&self.grid);
    }

    fn reset_history(&mut self) {
        self.cycles.reset();
        self.stats.reset();
    }

    fn toggle_at(&mut self, row: usize, column: usize) {
        if let Err(e) = self.grid.toggle(row, column) {
            warn!("{e}");
        }
        self.cycles.reset();
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

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
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.reseed();
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
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();
                ui.label(format!("Generation: {}", self.grid.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them while paused.");
            ui.separator();

            let total_size = board_size(&self.grid);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            for (row, cells) in self.grid.row_slices().enumerate() {
                for (column, cell) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(column as f32, row as f32) * (BOX_SIZE + SPACING),
                        Vec2::splat(BOX_SIZE),
                    );
                    let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = (pos - origin) / (BOX_SIZE + SPACING);
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        self.toggle_at(offset.y as usize, offset.x as usize);
                    }
                }
            }

            ui.separator();

            let total = self.grid.len();
            let live = self.grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
                ui.label(format!("Last step: +{} -{}", self.stats.births, self.stats.deaths));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
