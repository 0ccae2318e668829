use std::fmt;
use std::ops::Range;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed spreadsheet cell.
///
/// Booleans, dates and anything else the workbook may contain arrive here as
/// `Text`; blank cells and cell errors arrive as `Missing`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Try to interpret the cell as an `f64` for statistics and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a fractional part, like a
            // spreadsheet cell would show them.  Adding 0.0 drops the
            // sign of negative zero.
            CellValue::Number(v) if v.fract() == 0.0 && v.is_finite() => {
                write!(f, "{:.0}", v + 0.0)
            }
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, "NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The in-memory tabular dataset loaded from a spreadsheet file.
///
/// Invariant: every row has exactly `columns.len()` cells, and column names
/// are unique (the loader guarantees both).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names from the header row.
    pub columns: Vec<String>,
    /// Row-major cell data, parallel to `columns`.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of a column, in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<CellValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].clone()).collect())
    }

    /// Row range of the first `n` rows.
    pub fn head_range(&self, n: usize) -> Range<usize> {
        0..n.min(self.len())
    }

    /// Row range of the last `n` rows. May overlap [`Table::head_range`]
    /// when the table is short; callers render both ranges as computed.
    pub fn tail_range(&self, n: usize) -> Range<usize> {
        self.len().saturating_sub(n)..self.len()
    }

    /// Whether a column holds only numbers and blanks.
    ///
    /// A column with at least one text cell is non-numeric; an all-missing
    /// column still counts as numeric (its statistics come out as NaN).
    pub fn is_numeric_column(&self, col_idx: usize) -> bool {
        self.rows
            .iter()
            .all(|r| !matches!(r[col_idx], CellValue::Text(_)))
    }

    /// Remove every row containing at least one missing cell, in place.
    /// Returns the number of rows removed. Destructive; there is no undo.
    pub fn drop_missing_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|r| !r.iter().any(CellValue::is_missing));
        before - self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> CellValue {
        CellValue::Number(v)
    }

    fn sample() -> Table {
        Table::new(
            vec!["a".into(), "b".into(), "label".into()],
            vec![
                vec![num(1.0), num(10.0), CellValue::Text("x".into())],
                vec![num(2.0), CellValue::Missing, CellValue::Text("y".into())],
                vec![num(3.0), num(30.0), CellValue::Text("z".into())],
            ],
        )
    }

    #[test]
    fn head_and_tail_ranges_overlap_on_short_tables() {
        let t = sample();
        assert_eq!(t.head_range(5), 0..3);
        assert_eq!(t.tail_range(5), 0..3);
    }

    #[test]
    fn numeric_columns_exclude_text() {
        let t = sample();
        assert!(t.is_numeric_column(0));
        assert!(t.is_numeric_column(1));
        assert!(!t.is_numeric_column(2));
        // A column with only blanks is still numeric.
        let t = Table::new(
            vec!["c".into()],
            vec![vec![CellValue::Missing], vec![CellValue::Missing]],
        );
        assert!(t.is_numeric_column(0));
    }

    #[test]
    fn drop_missing_rows_is_idempotent() {
        let mut t = sample();
        assert_eq!(t.drop_missing_rows(), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.drop_missing_rows(), 0);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn display_formats_whole_numbers_without_fraction() {
        assert_eq!(num(3.0).to_string(), "3");
        assert_eq!(num(3.25).to_string(), "3.25");
        assert_eq!(num(-3.0).to_string(), "-3");
        assert_eq!(num(-0.0).to_string(), "0");
        assert_eq!(CellValue::Missing.to_string(), "NaN");
    }
}
