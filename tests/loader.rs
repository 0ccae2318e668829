//! Loader round-trip: write a real .xlsx fixture and load it back.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use tabulon::data::loader::load_file;
use tabulon::data::model::CellValue;
use tabulon::data::stats::describe;

/// 3 columns, 12 data rows, one blank cell in row 7 of the `score` column.
fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "id").unwrap();
    sheet.write_string(0, 1, "score").unwrap();
    sheet.write_string(0, 2, "label").unwrap();

    for i in 0..12u32 {
        sheet.write_number(i + 1, 0, i as f64).unwrap();
        if i != 7 {
            sheet.write_number(i + 1, 1, (i * 10) as f64).unwrap();
        }
        sheet
            .write_string(i + 1, 2, format!("row-{i}"))
            .unwrap();
    }

    workbook.save(path).unwrap();
}

#[test]
fn xlsx_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.xlsx");
    write_fixture(&path);

    let table = load_file(&path).unwrap();

    assert_eq!(table.columns, vec!["id", "score", "label"]);
    assert_eq!(table.len(), 12);
    assert_eq!(table.rows[0][0], CellValue::Number(0.0));
    assert_eq!(table.rows[7][1], CellValue::Missing);
    assert_eq!(table.rows[3][2], CellValue::Text("row-3".into()));
}

#[test]
fn clean_then_describe_counts_remaining_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.xlsx");
    write_fixture(&path);

    let mut table = load_file(&path).unwrap();
    assert_eq!(table.drop_missing_rows(), 1);
    assert_eq!(table.len(), 11);

    let stats = describe(&table);
    // `label` is text, so only the two numeric columns appear.
    assert_eq!(stats.len(), 2);
    assert!(stats.iter().all(|(_, s)| s.count == 11));
}

#[test]
fn missing_file_fails_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing-here.xlsx");
    assert!(load_file(&path).is_err());
}
