use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, NoticeKind};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Header – title and status line
// ---------------------------------------------------------------------------

/// Render the title and the latest notice.
pub fn header(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Data Analysis Application");
    });
    if let Some(notice) = &state.notice {
        ui.label(RichText::new(&notice.message).color(notice_color(notice.kind)));
    }
}

fn notice_color(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Info => Color32::from_rgb(60, 180, 75),
        NoticeKind::Warning => Color32::from_rgb(230, 160, 0),
        NoticeKind::Error => Color32::RED,
    }
}

// ---------------------------------------------------------------------------
// Action buttons
// ---------------------------------------------------------------------------

/// Render the load button and the four analysis actions.
pub fn action_buttons(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        if ui.button("Choose Excel File").clicked() {
            open_file_dialog(state);
        }
    });
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("View Head & Tail").clicked() {
            state.view_head_tail();
        }
        if ui.button("Analyze Data").clicked() {
            state.analyze();
        }
        if ui.button("Clean Data").clicked() {
            state.clean();
        }
        if ui.button("Plot Data").clicked() {
            state.request_plot();
        }
    });
}

// ---------------------------------------------------------------------------
// Column toggles
// ---------------------------------------------------------------------------

/// One checkbox per column of the loaded table, in header order.
pub fn column_toggles(ui: &mut Ui, state: &mut AppState) {
    let Some(columns) = state.table.as_ref().map(|t| t.columns.clone()) else {
        return;
    };
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for col in &columns {
            let mut checked = state.is_selected(col);
            if ui.checkbox(&mut checked, col).changed() {
                state.toggle_column(col);
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Output area – text block plus accumulated charts
// ---------------------------------------------------------------------------

/// Render the scrollable output: the current text block followed by every
/// chart rendered so far, newest at the bottom.
pub fn output_area(ui: &mut Ui, state: &AppState) {
    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            match &state.text_output {
                Some(text) => {
                    ui.add(egui::Label::new(RichText::new(text).monospace()).extend());
                }
                None if state.table.is_none() => {
                    ui.label("Load a spreadsheet to get started.");
                }
                None => {}
            }

            for (idx, chart) in state.charts.iter().enumerate() {
                plot::chart_panel(ui, idx, chart);
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spreadsheet")
        .add_filter("Excel files", &["xlsx", "xls"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.len(),
                    table.columns
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.load_failed(&e);
            }
        }
    }
}
