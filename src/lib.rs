//! Tabulon: a single-window Excel viewer and analyzer.
//!
//! The data layer ([`data`], [`chart`], [`state`]) is independent of the
//! windowing system; [`app`] and [`ui`] wire it into an egui window.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
