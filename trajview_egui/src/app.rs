use egui::{DragValue, Ui};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use trajview_core::{DualViewController, Result, ViewerConfig};

use crate::feed::DemoFeed;
use crate::palette::{Palette, MODERN_SERIES, SERIES_COLORS};
use crate::surface::EguiSurface;

/// Settings persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub viewer: ViewerConfig,
    /// Series colours as RGB triples
    pub series_colors: [[u8; 3]; SERIES_COLORS],
    /// Samples processed per frame
    pub sim_speed: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewer: ViewerConfig::default(),
            series_colors: MODERN_SERIES,
            sim_speed: 1,
        }
    }
}

pub struct App {
    settings: Settings,
    /// None until a session has been set up successfully
    controller: Option<DualViewController>,
    surface: EguiSurface,
    feed: DemoFeed,
    paused: bool,
    /// Last session error shown to the user
    last_error: Option<String>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings, DemoFeed::default())
    }

    /// Build the app and start a session; invalid settings fall back to defaults.
    pub fn with_settings(settings: Settings, feed: DemoFeed) -> Self {
        let settings = match settings.viewer.validate() {
            Ok(()) => settings,
            Err(err) => {
                error!(%err, "stored settings rejected, using defaults");
                Settings::default()
            }
        };
        let mut app = Self {
            surface: EguiSurface::new(Palette::from_rgb(settings.series_colors)),
            settings,
            controller: None,
            feed,
            paused: false,
            last_error: None,
        };
        app.report(|app| app.restart());
        app
    }

    /// Start a new session with the current settings.
    fn restart(&mut self) -> Result<()> {
        self.controller = None;
        self.surface.clear();
        self.feed.reset();

        let mut controller = DualViewController::new(self.settings.viewer)?;
        let (start, heading) = self.feed.start();
        controller.setup(&mut self.surface, self.feed.course(), start, heading)?;
        self.controller = Some(controller);
        self.last_error = None;
        info!(config = ?self.settings.viewer, "session started");
        Ok(())
    }

    /// Feed `sim_speed` samples into the controller.
    fn step(&mut self) -> Result<()> {
        let Some(controller) = self.controller.as_mut() else {
            return Ok(());
        };
        for _ in 0..self.settings.sim_speed {
            let mut sample = self.feed.next_sample();
            if !self.settings.viewer.use_gps {
                sample.gps = None;
            }
            controller.tick(&mut self.surface, &sample)?;
        }
        Ok(())
    }

    /// Run `op`, pausing and keeping the error on failure.
    fn report(&mut self, op: impl FnOnce(&mut Self) -> Result<()>) {
        if let Err(err) = op(self) {
            error!(%err, "session error");
            self.paused = true;
            self.last_error = Some(err.to_string());
        }
    }

    fn options(&mut self, ui: &mut Ui) {
        let mut restart = false;
        ui.horizontal(|ui| {
            let btn_text = if self.paused { "Play" } else { "Pause" };
            if ui.button(btn_text).clicked() {
                self.paused = !self.paused;
            }
            if ui.button("Restart").clicked() {
                restart = true;
            }
            ui.add(
                DragValue::new(&mut self.settings.sim_speed)
                    .range(1..=50)
                    .prefix("Speed: ")
                    .suffix("x"),
            );
        });

        // Every setting below is fixed for a session, so changing one restarts it
        let viewer = &mut self.settings.viewer;
        ui.horizontal(|ui| {
            restart |= ui.checkbox(&mut viewer.use_gps, "GPS").changed();
            restart |= ui
                .add(
                    DragValue::new(&mut viewer.buffer_size)
                        .range(1..=5000)
                        .prefix("Window: "),
                )
                .changed();
            restart |= ui
                .add(
                    DragValue::new(&mut viewer.wheel_base)
                        .speed(0.05)
                        .range(0.1..=10.0)
                        .prefix("L: ")
                        .suffix(" m"),
                )
                .changed();
            restart |= ui
                .add(
                    DragValue::new(&mut viewer.front_track)
                        .speed(0.05)
                        .range(0.1..=5.0)
                        .prefix("W: ")
                        .suffix(" m"),
                )
                .changed();
        });

        if restart {
            self.paused = false;
            self.report(|app| app.restart());
        }

        if let Some(state) = self.controller.as_ref().map(|c| c.state()) {
            ui.horizontal(|ui| {
                let pose = state.pose();
                ui.label(format!("Samples: {}", state.sample_count()));
                ui.label(format!(
                    "x: {:.1} m  y: {:.1} m  heading: {:.0}°",
                    pose.x,
                    pose.y,
                    pose.heading.to_degrees()
                ));
            });
        }
        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.paused {
            self.report(|app| app.step());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ctx.set_visuals(egui::Visuals::dark());
            self.options(ui);
            ui.separator();
            self.surface.show(ui);
        });

        if self.surface.take_render_request() {
            ctx.request_repaint_after(self.surface.min_repaint_interval());
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}
