use super::model::Table;

// ---------------------------------------------------------------------------
// Descriptive statistics (per numeric column)
// ---------------------------------------------------------------------------

/// Statistic row labels, in output order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary statistics of one numeric column, computed over its non-missing
/// values.  Undefined entries (empty column, single-value std) are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// The statistics in [`STAT_LABELS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }

    fn from_values(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        let n = values.len();

        let mean = if n == 0 {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / n as f64
        };

        // Sample standard deviation (ddof = 1).
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        ColumnStats {
            count: n,
            mean,
            std,
            min: values.first().copied().unwrap_or(f64::NAN),
            q25: percentile(&values, 0.25),
            q50: percentile(&values, 0.50),
            q75: percentile(&values, 0.75),
            max: values.last().copied().unwrap_or(f64::NAN),
        }
    }
}

/// Linearly interpolated percentile of sorted values, `q` in `[0, 1]`.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
        }
    }
}

/// Compute summary statistics for every numeric column of the table, in
/// column order.  Non-numeric columns are excluded entirely.
pub fn describe(table: &Table) -> Vec<(String, ColumnStats)> {
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(i, _)| table.is_numeric_column(*i))
        .map(|(i, name)| {
            let values: Vec<f64> = table.rows.iter().filter_map(|r| r[i].as_f64()).collect();
            (name.clone(), ColumnStats::from_values(values))
        })
        .collect()
}
