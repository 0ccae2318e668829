use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a spreadsheet file.  Dispatch by extension.
///
/// Supported formats: `.xlsx` and `.xls`.  The first worksheet is used; its
/// first row is treated as column headers and everything below as data.
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xls" => load_workbook(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;

    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("reading first sheet")?;

    let mut rows = range.rows();
    let header = rows.next().context("sheet is empty (no header row)")?;
    let columns = unique_headers(header);

    let data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Ok(Table::new(columns, data))
}

/// Convert one calamine cell into a [`CellValue`].
///
/// Blank cells and cell errors (`#DIV/0!`, `#N/A`, ...) become `Missing`;
/// booleans, dates and durations keep their display form as text.
pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Header names, made unique.  Blank header cells become `Unnamed: <idx>`,
/// duplicates get `.1`, `.2`, ... suffixes in column order.
pub(crate) fn unique_headers(cells: &[Data]) -> Vec<String> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::with_capacity(cells.len());

    for (i, cell) in cells.iter().enumerate() {
        let base = match cell {
            Data::Empty => format!("Unnamed: {i}"),
            other => other.to_string(),
        };
        let mut name = base.clone();
        let mut n = 1;
        while !used.insert(name.clone()) {
            name = format!("{base}.{n}");
            n += 1;
        }
        out.push(name);
    }
    out
}
