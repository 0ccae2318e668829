use std::ops::Range;

use super::model::Table;
use super::stats::{ColumnStats, STAT_LABELS};

// ---------------------------------------------------------------------------
// Aligned text rendering for the output area
// ---------------------------------------------------------------------------

/// Render the first and last `n` rows of the table as two aligned blocks
/// separated by a blank line.  Short tables repeat rows across the blocks;
/// no deduplication is done.
pub fn head_tail_block(table: &Table, n: usize) -> String {
    let head = render_rows(table, table.head_range(n));
    let tail = render_rows(table, table.tail_range(n));
    format!("{head}\n\n{tail}")
}

/// Render a row range as an aligned block: header row, then one line per
/// row with its original zero-based index in the leading column.
pub fn render_rows(table: &Table, range: Range<usize>) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(range.len() + 1);

    let mut header = vec![String::new()];
    header.extend(table.columns.iter().cloned());
    grid.push(header);

    for i in range {
        let mut line = vec![i.to_string()];
        line.extend(table.rows[i].iter().map(|c| c.to_string()));
        grid.push(line);
    }
    aligned(&grid)
}

/// Render per-column statistics as an aligned block: one column per numeric
/// field, one row per statistic in [`STAT_LABELS`] order.
pub fn stats_block(stats: &[(String, ColumnStats)]) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(STAT_LABELS.len() + 1);

    let mut header = vec![String::new()];
    header.extend(stats.iter().map(|(name, _)| name.clone()));
    grid.push(header);

    for (row, label) in STAT_LABELS.iter().enumerate() {
        let mut line = vec![label.to_string()];
        for (_, s) in stats {
            let v = s.values()[row];
            line.push(if *label == "count" {
                format!("{v:.0}")
            } else if v.is_nan() {
                "NaN".to_string()
            } else {
                format!("{v:.4}")
            });
        }
        grid.push(line);
    }
    aligned(&grid)
}

/// Align a grid of cells into fixed-width columns: the leading label
/// column left-aligned, every data column right-aligned.
fn aligned(grid: &[Vec<String>]) -> String {
    let n_cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..n_cols)
        .map(|c| {
            grid.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    grid.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| {
                    if c == 0 {
                        format!("{cell:<width$}", width = widths[c])
                    } else {
                        format!("{cell:>width$}", width = widths[c])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::data::stats::describe;

    fn numbered_table(n_rows: usize) -> Table {
        Table::new(
            vec!["a".into(), "b".into()],
            (0..n_rows)
                .map(|i| {
                    vec![
                        CellValue::Number(i as f64),
                        CellValue::Number((i * 10) as f64),
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn head_tail_has_two_blocks_of_five() {
        let block = head_tail_block(&numbered_table(12), 5);
        let parts: Vec<&str> = block.split("\n\n").collect();
        assert_eq!(parts.len(), 2);
        // Header plus five rows per block.
        assert_eq!(parts[0].lines().count(), 6);
        assert_eq!(parts[1].lines().count(), 6);
        // The tail block carries original row indices.
        assert!(parts[1].lines().nth(1).unwrap().trim_start().starts_with('7'));
    }

    #[test]
    fn short_tables_repeat_rows_across_blocks() {
        let block = head_tail_block(&numbered_table(3), 5);
        let parts: Vec<&str> = block.split("\n\n").collect();
        assert_eq!(parts[0], parts[1]);
        assert_eq!(parts[0].lines().count(), 4);
    }

    #[test]
    fn stats_block_has_one_line_per_statistic() {
        let t = numbered_table(4);
        let block = stats_block(&describe(&t));
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 1 + STAT_LABELS.len());
        assert!(lines[0].contains('a') && lines[0].contains('b'));
        for (line, label) in lines[1..].iter().zip(STAT_LABELS) {
            assert!(line.starts_with(label), "line {line:?} vs {label}");
        }
        // Short labels stay flush left, padded on the right.
        assert!(lines[2].starts_with("mean "));
        assert!(lines[1].contains('4')); // count row
    }

    #[test]
    fn missing_cells_render_as_nan() {
        let t = Table::new(
            vec!["a".into()],
            vec![vec![CellValue::Missing], vec![CellValue::Number(1.0)]],
        );
        let block = render_rows(&t, 0..2);
        assert!(block.contains("NaN"));
    }
}
