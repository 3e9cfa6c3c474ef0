use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{CompareError, Result};
use crate::model::{Cell, Table};

/// Reads the first worksheet of an Antares output workbook.
///
/// Row 1 is taken as the header row; every following row is data. The
/// workbook handle is released before returning.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_first_sheet(&mut workbook)?;

    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => header.iter().map(|cell| cell_to_string(Some(cell))).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    Ok(Table::new(columns, rows))
}

fn read_first_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CompareError::InvalidWorkbook("workbook has no worksheet".into()))?;
    let range = range_result.map_err(CompareError::from)?;
    Ok(range)
}

fn cell_to_value(cell: &DataType) -> Cell {
    match cell {
        DataType::Float(value) => Cell::Number(*value),
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Bool(value) => Cell::Boolean(*value),
        DataType::String(value) => Cell::Text(value.clone()),
        // Dates, durations and error cells carry no indicator value.
        _ => Cell::Empty,
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
