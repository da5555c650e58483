//! Workbook loading from downloaded byte streams.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use crate::error::LoadError;

/// One worksheet: rows of stringified cells, missing cells as `""`.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// An in-memory workbook with sheets in declared order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Sheet names in declared order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// Look up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Load a workbook from downloaded bytes.
///
/// CSV files become a single-sheet workbook named `Sheet1`; everything
/// else goes through calamine's format auto-detection.
pub fn load_workbook(bytes: &[u8], path: &str) -> Result<Workbook, LoadError> {
    if path.to_lowercase().ends_with(".csv") {
        return load_csv(bytes);
    }
    load_spreadsheet(bytes)
}

fn load_spreadsheet(bytes: &[u8]) -> Result<Workbook, LoadError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut book =
        open_workbook_auto_from_rs(cursor).map_err(|e| LoadError::Workbook(e.to_string()))?;

    let names: Vec<String> = book.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());

    for name in names {
        let range = book
            .worksheet_range(&name)
            .map_err(|e| LoadError::Workbook(e.to_string()))?;
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();
        debug!(sheet = %name, rows = rows.len(), "loaded sheet");
        sheets.push(Sheet { name, rows });
    }

    Ok(Workbook { sheets })
}

fn load_csv(bytes: &[u8]) -> Result<Workbook, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoadError::Csv(e.to_string()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Workbook {
        sheets: vec![Sheet {
            name: "Sheet1".to_string(),
            rows,
        }],
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => n.to_string(),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
