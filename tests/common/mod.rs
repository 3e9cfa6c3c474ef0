#![allow(dead_code)]

use std::path::Path;

use antares_compare::catalog::Indicator;
use antares_compare::compare::ScenarioInput;
use antares_compare::model::{Cell, Table};
use rust_xlsxwriter::Workbook;

/// Header literal in the form Antares exports it.
pub fn header(indicator: &Indicator) -> String {
    indicator.column.to_string()
}

/// Single-column-per-indicator table whose columns each hold `values`.
pub fn table(columns: &[(&Indicator, &[f64])]) -> Table {
    let headers = columns.iter().map(|(indicator, _)| header(indicator)).collect();
    let height = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
    let rows = (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|(_, values)| {
                    values
                        .get(row)
                        .map_or(Cell::Empty, |value| Cell::Number(*value))
                })
                .collect()
        })
        .collect();
    Table::new(headers, rows)
}

pub fn scenario(name: &str, table: Table) -> ScenarioInput {
    ScenarioInput {
        name: name.to_string(),
        source: None,
        table,
    }
}

/// Writes an Antares-like workbook: headers in row 1, one value row per entry.
pub fn write_input(path: &Path, columns: &[(&Indicator, &[f64])]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, (indicator, values)) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header(indicator))
            .expect("header written");
        for (row, value) in values.iter().enumerate() {
            worksheet
                .write_number((row + 1) as u32, col as u16, *value)
                .expect("value written");
        }
    }
    workbook.save(path).expect("workbook saved");
}
