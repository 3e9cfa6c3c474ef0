use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Error type covering the failures that abort a comparison run.
///
/// Problems local to a single cell or column (missing indicator, unparsable
/// value, unusable reference) never surface here; they become null values.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Wrapper for IO failures such as listing the input directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the JSON configuration file cannot be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a workbook has no worksheet to read.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when the configured input directory does not exist.
    #[error("input directory not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the input directory holds no scenario workbook.
    #[error("no .xlsx file found in {}", .0.display())]
    NoInputFiles(PathBuf),

    /// Raised when a comparison is requested over an empty scenario list.
    #[error("no scenario to compare")]
    NoScenarios,

    /// Raised when two input files resolve to the same display name.
    #[error("scenario name '{0}' is used by more than one input file")]
    DuplicateScenario(String),

    /// Raised when the requested reference matches no scenario.
    #[error("reference scenario '{0}' not found among the inputs")]
    UnknownReference(String),

    /// Raised when a `FILE=LABEL` override cannot be parsed.
    #[error("invalid scenario name override '{0}', expected FILE=LABEL")]
    InvalidNameOverride(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
