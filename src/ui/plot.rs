use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::chart::{Chart, ChartData};
use crate::color::series_palette;

// ---------------------------------------------------------------------------
// Chart panels (below the text output)
// ---------------------------------------------------------------------------

/// Height of each embedded chart panel.
const CHART_HEIGHT: f32 = 320.0;

/// Render one accumulated chart.  `idx` keeps plot ids unique across the
/// growing list.
pub fn chart_panel(ui: &mut Ui, idx: usize, chart: &Chart) {
    ui.separator();
    ui.strong(chart.title);

    let mut plot = Plot::new(("chart", idx))
        .legend(Legend::default())
        .show_grid(true)
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true);

    if let ChartData::Scatter {
        x_label, y_label, ..
    } = &chart.data
    {
        plot = plot.x_axis_label(x_label).y_axis_label(y_label);
    }

    plot.show(ui, |plot_ui| match &chart.data {
        ChartData::Line(series) => {
            let colors = series_palette(series.len());
            for (s, color) in series.iter().zip(colors) {
                let points: PlotPoints = s.points.clone().into();
                plot_ui.line(Line::new(points).name(&s.name).color(color).width(1.5));
            }
        }

        ChartData::Scatter { points, .. } => {
            let points: PlotPoints = points.clone().into();
            plot_ui.points(
                Points::new(points)
                    .radius(2.5)
                    .color(Color32::LIGHT_BLUE),
            );
        }

        ChartData::Bar { bar_width, series } => {
            let colors = series_palette(series.len());
            for (s, color) in series.iter().zip(colors) {
                let bars: Vec<Bar> = s
                    .points
                    .iter()
                    .map(|&[x, h]| Bar::new(x, h).width(*bar_width))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&s.name).color(color));
            }
        }

        ChartData::Histogram(series) => {
            let colors = series_palette(series.len());
            for (s, color) in series.iter().zip(colors) {
                let bars: Vec<Bar> = s
                    .bins
                    .iter()
                    .map(|&(center, count)| {
                        Bar::new(center, count as f64).width(s.bin_width)
                    })
                    .collect();
                // Translucent fill so overlapping histograms stay readable.
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&s.name)
                        .color(color.gamma_multiply(0.5)),
                );
            }
        }
    });
}
