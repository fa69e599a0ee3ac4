//! Spreadsheet serialization for query results.
//!
//! Writes a `QueryResult` to a single-sheet xlsx file: header row from the
//! column names, one data row per record, no index column.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::db::{QueryResult, Value};
use crate::error::{Result, SqlsheetError};

/// Writes the result set to an xlsx file at the given path.
///
/// Overwrites any existing file. Column order and row order follow the
/// query result exactly.
pub fn write_table(result: &QueryResult, output: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    fill_worksheet(workbook.add_worksheet(), result)
        .map_err(|e| SqlsheetError::export(format!("{}: {e}", output.display())))?;

    workbook
        .save(output)
        .map_err(|e| SqlsheetError::export(format!("{}: {e}", output.display())))?;

    Ok(())
}

fn fill_worksheet(
    worksheet: &mut Worksheet,
    result: &QueryResult,
) -> std::result::Result<(), XlsxError> {
    for (col, info) in result.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, info.name.as_str())?;
    }

    for (row, record) in result.rows.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, value) in record.iter().enumerate() {
            write_cell(worksheet, row, col as u16, value)?;
        }
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
) -> std::result::Result<(), XlsxError> {
    match value {
        // NULL renders as a blank cell
        Value::Null => Ok(()),
        Value::Bool(b) => worksheet.write_boolean(row, col, *b).map(|_| ()),
        Value::Int(i) => worksheet.write_number(row, col, *i as f64).map(|_| ()),
        Value::Float(f) => worksheet.write_number(row, col, *f).map(|_| ()),
        Value::String(s) => worksheet.write_string(row, col, s.as_str()).map(|_| ()),
        Value::Bytes(_) => worksheet
            .write_string(row, col, value.to_display_string())
            .map(|_| ()),
    }
}
