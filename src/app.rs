use eframe::egui::{self, Align2};

use crate::chart::ChartKind;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TabulonApp {
    pub state: AppState,
}

impl eframe::App for TabulonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status line ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state);
        });

        // ---- Central panel: actions, toggles, scrollable output ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::action_buttons(ui, &mut self.state);
            panels::column_toggles(ui, &mut self.state);
            ui.separator();
            panels::output_area(ui, &self.state);
        });

        // ---- Chart-kind picker ----
        if self.state.picker_open {
            egui::Window::new("Select Plot Type")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    for kind in ChartKind::ALL {
                        if ui.button(kind.label()).clicked() {
                            self.state.choose_chart(kind);
                        }
                    }
                });
        }
    }
}
