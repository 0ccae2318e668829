use std::collections::BTreeSet;

use crate::chart::{Chart, ChartKind, build_chart};
use crate::data::model::Table;
use crate::data::stats::describe;
use crate::data::text::{head_tail_block, stats_block};

/// Rows shown from each end of the table by "View Head & Tail".
pub const HEAD_TAIL_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A user-facing acknowledgement or warning, shown as the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every user action maps to one method here; the UI layer only reads
/// `text_output`, `charts` and `notice` back out.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None until the user loads a file).
    pub table: Option<Table>,

    /// Column names currently checked for plotting.
    pub selection: BTreeSet<String>,

    /// Content of the scrollable text area, replaced per action.
    pub text_output: Option<String>,

    /// Charts accumulated below the text area.  Never cleared within a
    /// session; each plot action appends.
    pub charts: Vec<Chart>,

    /// Latest notice shown in the status line.
    pub notice: Option<Notice>,

    /// Whether the chart-kind picker window is open.
    pub picker_open: bool,
}

impl AppState {
    // -- notices --

    fn info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        });
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Warning,
            message: message.into(),
        });
    }

    // -- loading --

    /// Ingest a newly loaded table, discarding the previous one and all
    /// column toggles.
    pub fn set_table(&mut self, table: Table) {
        self.selection.clear();
        self.picker_open = false;
        self.table = Some(table);
        self.info("File loaded successfully");
    }

    /// Record a load failure.  Prior table and outputs stay untouched.
    pub fn load_failed(&mut self, err: &anyhow::Error) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            message: format!("Failed to load file: {err:#}"),
        });
    }

    // -- column toggles --

    pub fn is_selected(&self, column: &str) -> bool {
        self.selection.contains(column)
    }

    pub fn toggle_column(&mut self, column: &str) {
        if !self.selection.remove(column) {
            self.selection.insert(column.to_string());
        }
    }

    /// Selected column names in table column order.  Scatter takes its x
    /// and y from the first two entries of this.
    pub fn selected_in_order(&self) -> Vec<String> {
        match &self.table {
            Some(t) => t
                .columns
                .iter()
                .filter(|c| self.selection.contains(*c))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    // -- actions --

    /// Replace the text output with the first and last five rows.
    pub fn view_head_tail(&mut self) {
        match &self.table {
            Some(t) => self.text_output = Some(head_tail_block(t, HEAD_TAIL_ROWS)),
            None => self.warn("No data loaded"),
        }
    }

    /// Replace the text output with per-column descriptive statistics.
    pub fn analyze(&mut self) {
        let Some(t) = &self.table else {
            self.warn("No data loaded");
            return;
        };
        let stats = describe(t);
        if stats.is_empty() {
            self.warn("No numeric columns to analyze");
        } else {
            self.text_output = Some(stats_block(&stats));
        }
    }

    /// Drop every row with a missing value, in place.  Irreversible.
    pub fn clean(&mut self) {
        match &mut self.table {
            Some(t) => {
                let removed = t.drop_missing_rows();
                self.info(format!(
                    "Data cleaned ({removed} rows with missing values dropped)"
                ));
            }
            None => self.warn("No data loaded"),
        }
    }

    /// Open the chart-kind picker if a table is loaded and at least one
    /// column is checked.
    pub fn request_plot(&mut self) {
        if self.table.is_none() {
            self.warn("No data loaded");
        } else if self.selection.is_empty() {
            self.warn("No columns selected");
        } else {
            self.picker_open = true;
        }
    }

    /// Picker confirmed: build the chart and append it below prior output.
    pub fn choose_chart(&mut self, kind: ChartKind) {
        self.picker_open = false;
        let columns = self.selected_in_order();
        let Some(t) = &self.table else {
            self.warn("No data loaded");
            return;
        };
        match build_chart(t, &columns, kind) {
            Ok(chart) => self.charts.push(chart),
            Err(e) => self.warn(e.to_string()),
        }
    }
}
