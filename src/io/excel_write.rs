use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::config::ColumnWidths;
use crate::error::Result;
use crate::report::ReportData;

/// Writes the report sheets to the given path.
///
/// Each sheet has scenario names in row 1 and metric keys in column A; null
/// values are left blank.
pub fn write_report(path: &Path, report: &ReportData, widths: &ColumnWidths) -> Result<()> {
    let mut workbook_writer = Workbook::new();
    let header_format = Format::new().set_bold();

    for table in &report.sheets {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(&table.sheet_name)?;

        for (col_idx, header) in table.columns.iter().enumerate() {
            worksheet.write_string_with_format(0, (col_idx + 1) as u16, header, &header_format)?;
        }

        for (row_idx, (metric, values)) in table.rows.iter().enumerate() {
            let row = (row_idx + 1) as u32;
            worksheet.write_string_with_format(row, 0, metric, &header_format)?;
            for (col_idx, value) in values.iter().enumerate() {
                if let Some(value) = value {
                    worksheet.write_number(row, (col_idx + 1) as u16, *value)?;
                }
            }
        }

        worksheet.set_column_width(0, widths.first)?;
        for col_idx in 0..table.columns.len() {
            worksheet.set_column_width((col_idx + 1) as u16, widths.other)?;
        }
    }

    workbook_writer.save(path)?;
    Ok(())
}
