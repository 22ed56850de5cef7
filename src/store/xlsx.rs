//! Reading and writing record collections as `.xlsx` workbooks.
//!
//! # Responsibilities
//! - Materialize a full collection from a workbook (all sheets)
//! - Serialize a full collection back, overwriting the destination
//! - Degrade a missing file to an empty collection
//!
//! # Design Decisions
//! - Rows with fewer than three cells are skipped
//! - A non-numeric amount cell degrades to 0.0; the row is kept
//! - Writing discards prior content and formatting entirely

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::store::record::Record;

/// Storage failures surfaced to the handler boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be opened or parsed.
    #[error("failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    /// The collection could not be serialized or saved.
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

/// Read the full collection stored at `path`.
///
/// A nonexistent file is an empty collection, never an error. Every row of
/// every sheet with at least three cells becomes one [`Record`]: cell 0 as
/// text, cell 1 as number, cell 2 as text.
pub fn read_records(path: &Path) -> Result<Vec<Record>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let mut records = Vec::new();

    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;
        for row in range.rows() {
            if row.len() < 3 {
                continue;
            }
            records.push(Record {
                name: cell_text(&row[0]),
                amount: cell_number(&row[1]),
                status: cell_text(&row[2]),
            });
        }
    }

    Ok(records)
}

/// Overwrite `path` with a fresh single-sheet workbook holding `records`.
///
/// One row per record, columns `(name, amount, status)`.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Data")?;

    for (i, record) in records.iter().enumerate() {
        let row = i as u32;
        sheet.write_string(row, 0, &record.name)?;
        sheet.write_number(row, 1, record.amount)?;
        sheet.write_string(row, 2, &record.status)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Render a cell as text. Empty cells become the empty string; numeric
/// cells use their display form.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a cell as a number. Non-numeric cells degrade to 0.0 so the row
/// is kept rather than dropped.
fn cell_number(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = read_records(&temp_path(&dir, "absent.xlsx")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "roundtrip.xlsx");

        let original = vec![
            Record::pending("Alice", 50.0),
            Record {
                name: "Bob".to_string(),
                amount: 12.5,
                status: Record::APPROVED.to_string(),
            },
            Record {
                name: "Citra".to_string(),
                amount: 0.0,
                status: Record::REJECTED.to_string(),
            },
        ];

        write_records(&path, &original).unwrap();
        let read_back = read_records(&path).unwrap();
        assert_eq!(read_back, original);
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "overwrite.xlsx");

        write_records(&path, &[Record::pending("Alice", 1.0), Record::pending("Bob", 2.0)]).unwrap();
        write_records(&path, &[Record::pending("Citra", 3.0)]).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Citra");
    }

    #[test]
    fn test_corrupt_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "corrupt.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, StoreError::Read(_)));
    }

    #[test]
    fn test_cell_number_degrades_to_zero() {
        assert_eq!(cell_number(&Data::String("not a number".to_string())), 0.0);
        assert_eq!(cell_number(&Data::String(" 42.5 ".to_string())), 42.5);
        assert_eq!(cell_number(&Data::Empty), 0.0);
        assert_eq!(cell_number(&Data::Int(7)), 7.0);
    }

    #[test]
    fn test_empty_collection_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "empty.xlsx");

        write_records(&path, &[]).unwrap();
        assert!(read_records(&path).unwrap().is_empty());
    }
}
