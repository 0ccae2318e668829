use thiserror::Error;

use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Chart kinds
// ---------------------------------------------------------------------------

/// The four chart kinds offered by the plot picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Scatter,
    Bar,
    Histogram,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Line, Self::Scatter, Self::Bar, Self::Histogram];

    /// Button label in the picker window.
    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "Line Plot",
            Self::Scatter => "Scatter Plot",
            Self::Bar => "Bar Chart",
            Self::Histogram => "Histogram",
        }
    }

    /// Chart title: capitalized kind name.
    pub fn title(self) -> &'static str {
        match self {
            Self::Line => "Line Plot",
            Self::Scatter => "Scatter Plot",
            Self::Bar => "Bar Plot",
            Self::Histogram => "Histogram Plot",
        }
    }
}

// ---------------------------------------------------------------------------
// Chart construction errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Scatter plot requires at least two columns")]
    ScatterNeedsTwoColumns,
}

// ---------------------------------------------------------------------------
// Chart data (renderer-agnostic)
// ---------------------------------------------------------------------------

/// One named series of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// Binned frequencies of one column: `(bin center, count)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub name: String,
    pub bin_width: f64,
    pub bins: Vec<(f64, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// One line per selected column, x = row index.
    Line(Vec<Series>),
    /// First two selected columns as x and y coordinates.
    Scatter {
        x_label: String,
        y_label: String,
        points: Vec<[f64; 2]>,
    },
    /// One bar group per row at x = row index, one bar per column inside
    /// the group; series points are `[bar x position, height]`.
    Bar { bar_width: f64, series: Vec<Series> },
    /// Overlapping per-column frequency histograms.
    Histogram(Vec<HistogramSeries>),
}

/// A fully constructed chart, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: &'static str,
    pub data: ChartData,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Number of histogram bins per column.
const HISTOGRAM_BINS: usize = 10;

/// Fraction of each unit x-interval covered by a bar group.
const BAR_GROUP_FILL: f64 = 0.8;

/// Build a chart of the given kind from the selected columns, in selection
/// order.  Cells that are missing or non-numeric contribute no data point;
/// no other validation of column content is done.
pub fn build_chart(table: &Table, columns: &[String], kind: ChartKind) -> Result<Chart, ChartError> {
    let data = match kind {
        ChartKind::Line => ChartData::Line(
            columns
                .iter()
                .map(|col| Series {
                    name: col.clone(),
                    points: indexed_values(table, col),
                })
                .collect(),
        ),

        ChartKind::Scatter => {
            if columns.len() < 2 {
                return Err(ChartError::ScatterNeedsTwoColumns);
            }
            let (x_col, y_col) = (&columns[0], &columns[1]);
            ChartData::Scatter {
                x_label: x_col.clone(),
                y_label: y_col.clone(),
                points: paired_values(table, x_col, y_col),
            }
        }

        ChartKind::Bar => {
            let k = columns.len().max(1);
            let bar_width = BAR_GROUP_FILL / k as f64;
            let series = columns
                .iter()
                .enumerate()
                .map(|(j, col)| {
                    // Offset each column's bar inside its row group.
                    let offset = (j as f64 - (k as f64 - 1.0) / 2.0) * bar_width;
                    Series {
                        name: col.clone(),
                        points: indexed_values(table, col)
                            .into_iter()
                            .map(|[x, y]| [x + offset, y])
                            .collect(),
                    }
                })
                .collect();
            ChartData::Bar { bar_width, series }
        }

        ChartKind::Histogram => ChartData::Histogram(
            columns
                .iter()
                .map(|col| histogram_series(table, col))
                .collect(),
        ),
    };

    Ok(Chart {
        kind,
        title: kind.title(),
        data,
    })
}

/// `[row index, value]` for every numeric cell of the column.
fn indexed_values(table: &Table, column: &str) -> Vec<[f64; 2]> {
    let Some(idx) = table.column_index(column) else {
        return Vec::new();
    };
    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r[idx].as_f64().map(|v| [i as f64, v]))
        .collect()
}

/// `[x, y]` for every row where both columns hold numbers.
fn paired_values(table: &Table, x_col: &str, y_col: &str) -> Vec<[f64; 2]> {
    let (Some(xi), Some(yi)) = (table.column_index(x_col), table.column_index(y_col)) else {
        return Vec::new();
    };
    table
        .rows
        .iter()
        .filter_map(|r| Some([r[xi].as_f64()?, r[yi].as_f64()?]))
        .collect()
}

/// Bin the column's numeric values into [`HISTOGRAM_BINS`] equal-width bins
/// over its own range.  A single-valued column gets a widened range so the
/// bins keep a positive width.
fn histogram_series(table: &Table, column: &str) -> HistogramSeries {
    let values: Vec<f64> = table
        .column_values(column)
        .unwrap_or_default()
        .iter()
        .filter_map(|c| c.as_f64())
        .collect();

    if values.is_empty() {
        return HistogramSeries {
            name: column.to_string(),
            bin_width: 1.0,
            bins: Vec::new(),
        };
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let bin_width = (max - min) / HISTOGRAM_BINS as f64;

    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for v in &values {
        let i = (((v - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[i] += 1;
    }

    HistogramSeries {
        name: column.to_string(),
        bin_width,
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(i, c)| (min + (i as f64 + 0.5) * bin_width, c))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn table() -> Table {
        Table::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![CellValue::Number(1.0), CellValue::Number(10.0)],
                vec![CellValue::Number(2.0), CellValue::Missing],
                vec![CellValue::Number(3.0), CellValue::Number(30.0)],
            ],
        )
    }

    #[test]
    fn scatter_needs_two_columns() {
        let err = build_chart(&table(), &["a".into()], ChartKind::Scatter).unwrap_err();
        assert_eq!(err, ChartError::ScatterNeedsTwoColumns);
    }

    #[test]
    fn scatter_uses_first_two_columns_and_skips_missing() {
        let chart =
            build_chart(&table(), &["a".into(), "b".into()], ChartKind::Scatter).unwrap();
        let ChartData::Scatter {
            x_label,
            y_label,
            points,
        } = chart.data
        else {
            panic!("expected scatter data");
        };
        assert_eq!(x_label, "a");
        assert_eq!(y_label, "b");
        // Row 1 has a missing b, so only two points survive.
        assert_eq!(points, vec![[1.0, 10.0], [3.0, 30.0]]);
    }

    #[test]
    fn line_has_one_series_per_column() {
        let chart = build_chart(&table(), &["a".into(), "b".into()], ChartKind::Line).unwrap();
        let ChartData::Line(series) = chart.data else {
            panic!("expected line data");
        };
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].points, vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]]);
        // Missing cell leaves a gap in row order.
        assert_eq!(series[1].points, vec![[0.0, 10.0], [2.0, 30.0]]);
    }

    #[test]
    fn bar_groups_offset_columns_within_each_row() {
        let chart = build_chart(&table(), &["a".into(), "b".into()], ChartKind::Bar).unwrap();
        let ChartData::Bar { bar_width, series } = chart.data else {
            panic!("expected bar data");
        };
        assert_eq!(bar_width, 0.4);
        // Two columns: offsets -0.2 and +0.2 around each row index.
        assert_eq!(series[0].points[0], [-0.2, 1.0]);
        assert_eq!(series[1].points[0], [0.2, 10.0]);
    }

    #[test]
    fn histogram_bins_cover_the_value_range() {
        let t = Table::new(
            vec!["v".into()],
            (0..100)
                .map(|i| vec![CellValue::Number(i as f64)])
                .collect(),
        );
        let chart = build_chart(&t, &["v".into()], ChartKind::Histogram).unwrap();
        let ChartData::Histogram(series) = chart.data else {
            panic!("expected histogram data");
        };
        let s = &series[0];
        assert_eq!(s.bins.len(), 10);
        assert_eq!(s.bins.iter().map(|(_, c)| c).sum::<usize>(), 100);
        // Uniform values over [0, 99] fill every bin.
        assert!(s.bins.iter().all(|(_, c)| *c > 0));
    }

    #[test]
    fn single_valued_histogram_keeps_positive_width() {
        let t = Table::new(
            vec!["v".into()],
            vec![vec![CellValue::Number(7.0)]; 3],
        );
        let chart = build_chart(&t, &["v".into()], ChartKind::Histogram).unwrap();
        let ChartData::Histogram(series) = chart.data else {
            panic!("expected histogram data");
        };
        assert!(series[0].bin_width > 0.0);
        assert_eq!(series[0].bins.iter().map(|(_, c)| c).sum::<usize>(), 3);
    }
}
