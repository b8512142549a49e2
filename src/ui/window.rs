//! egui front-end for the clock-in / clock-out form.
//!
//! All state lives in [`Controller`]; this module only maps it onto widgets
//! and forwards button clicks.

use crate::config::{Config, Theme};
use crate::core::{Clock, Controller};
use crate::errors::{AppError, AppResult};
use egui::{Color32, RichText};
use tracing::{debug, warn};

const HEADING: &str = "Clock In / Clock Out";

struct Palette {
    background: Color32,
    foreground: Color32,
    button_background: Color32,
    button_foreground: Color32,
}

impl Palette {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            background: parse_color(&theme.background, Color32::BLACK),
            foreground: parse_color(&theme.foreground, Color32::WHITE),
            button_background: parse_color(&theme.button_background, Color32::WHITE),
            button_foreground: parse_color(&theme.button_foreground, Color32::BLACK),
        }
    }
}

fn parse_color(hex: &str, fallback: Color32) -> Color32 {
    Color32::from_hex(hex.trim()).unwrap_or_else(|_| {
        warn!(value = hex, "invalid colour in theme, using default");
        fallback
    })
}

pub struct ClockApp<C: Clock> {
    controller: Controller<C>,
    theme: Theme,
    palette: Palette,
}

impl<C: Clock> ClockApp<C> {
    pub fn new(controller: Controller<C>, theme: Theme) -> Self {
        let palette = Palette::from_theme(&theme);
        Self {
            controller,
            theme,
            palette,
        }
    }

    fn text(&self, s: &str, size: f32) -> RichText {
        RichText::new(s).size(size).color(self.palette.foreground)
    }

    fn button(&self, s: &str) -> egui::Button<'static> {
        egui::Button::new(
            RichText::new(s)
                .size(self.theme.button_size)
                .color(self.palette.button_foreground),
        )
        .fill(self.palette.button_background)
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let controls = self.controller.controls();

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(self.text(HEADING, self.theme.title_size));
            ui.add_space(10.0);

            ui.label(self.text("Task:", self.theme.label_size));
            ui.add_space(5.0);
            let label_size = self.theme.label_size;
            ui.add(
                egui::TextEdit::singleline(self.controller.task_mut())
                    .font(egui::FontId::proportional(label_size))
                    .desired_width(220.0),
            );
            ui.add_space(10.0);

            let clock_in = self.button("Clock In");
            if ui.add_enabled(controls.clock_in_enabled, clock_in).clicked()
                && let Err(e) = self.controller.clock_in()
            {
                warn!("clock in rejected: {e}");
            }
            ui.add_space(10.0);

            let clock_out = self.button("Clock Out");
            if ui.add_enabled(controls.clock_out_enabled, clock_out).clicked()
                && let Err(e) = self.controller.clock_out()
            {
                debug!("clock out did not complete: {e}");
            }
            ui.add_space(10.0);

            let displays = self.controller.displays().clone();
            for line in [&displays.clock_in, &displays.clock_out, &displays.total] {
                ui.label(self.text(line, self.theme.status_size));
                ui.add_space(5.0);
            }
        });
    }
}

impl<C: Clock> eframe::App for ClockApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::new()
            .fill(self.palette.background)
            .inner_margin(egui::Margin::same(20));

        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| self.show_form(ui));
    }
}

/// Open the window and block until it is closed.
pub fn run<C: Clock + 'static>(controller: Controller<C>, cfg: &Config) -> AppResult<()> {
    let app = ClockApp::new(controller, cfg.theme.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&cfg.window_title)
            .with_inner_size([380.0, 440.0])
            .with_min_inner_size([320.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        &cfg.window_title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}
