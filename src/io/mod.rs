//! Spreadsheet adapters: reading scenario workbooks and writing the report.

pub mod excel_read;
pub mod excel_write;
