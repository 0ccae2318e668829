/// Data layer: core types, loading, statistics, and text rendering.
///
/// Architecture:
/// ```text
///  .xlsx / .xls
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse workbook → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  column names + Vec<Vec<CellValue>>
///   └──────────┘
///      │      │
///      ▼      ▼
///   ┌──────┐ ┌──────┐
///   │ stats │ │ text │  describe() / aligned text blocks
///   └──────┘ └──────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
pub mod text;
