use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::catalog::INDICATORS;
use crate::config::CompareConfig;
use crate::delta::delta_table;
use crate::derive::derive_metrics;
use crate::error::{CompareError, Result};
use crate::extract::{extract, missing_columns};
use crate::io::{excel_read, excel_write};
use crate::model::{ComparisonTable, MetricRow, Table};
use crate::report::build_report;

/// Result of a comparison run, before and after it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Absolute values, extracted and derived.
    pub table: ComparisonTable,
    /// Percentage deltas against the reference scenario.
    pub deltas: ComparisonTable,
    /// Display name of the reference scenario.
    pub reference: String,
}

/// A scenario table waiting to be compared.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    pub name: String,
    pub source: Option<PathBuf>,
    pub table: Table,
}

/// Lists the scenario workbooks of `dir`, sorted by file name.
///
/// Excel lock files and `exclude` (the report itself) are skipped.
pub fn discover_inputs(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CompareError::MissingInput(dir.to_path_buf()));
    }

    let excluded_name = exclude.and_then(Path::file_name);
    let excluded_parent = exclude.map(parent_or_current);

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_workbook(&path) {
            continue;
        }
        let is_report = excluded_name.is_some()
            && path.file_name() == excluded_name
            && excluded_parent.as_deref().map(canonical) == Some(canonical(dir));
        if is_report {
            debug!(path = %path.display(), "skipping previous report");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
    Ok(files)
}

fn is_workbook(path: &Path) -> bool {
    let is_lock_file = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with("~$"));
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    has_extension && !is_lock_file
}

fn parent_or_current(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Reads every input workbook and names it according to `config`.
#[instrument(level = "info", skip_all, fields(file_count = files.len()))]
pub fn load_scenarios(files: &[PathBuf], config: &CompareConfig) -> Result<Vec<ScenarioInput>> {
    let mut scenarios: Vec<ScenarioInput> = Vec::with_capacity(files.len());

    for path in files {
        let name = config.display_name(path);
        if scenarios.iter().any(|scenario| scenario.name == name) {
            return Err(CompareError::DuplicateScenario(name));
        }

        info!(file = %path.display(), scenario = %name, "reading scenario workbook");
        let table = excel_read::read_table(path)?;
        debug!(columns = table.columns.len(), rows = table.rows.len(), "scenario table read");

        scenarios.push(ScenarioInput {
            name,
            source: Some(path.clone()),
            table,
        });
    }

    Ok(scenarios)
}

/// Runs extraction, derivation and delta computation over in-memory tables.
///
/// `reference` selects the reference scenario by display name or source file
/// name; the first scenario is used when it is `None`.
pub fn compare_scenarios(
    scenarios: &[ScenarioInput],
    reference: Option<&str>,
) -> Result<Comparison> {
    let reference_index = match reference {
        Some(wanted) => find_reference(scenarios, wanted)
            .ok_or_else(|| CompareError::UnknownReference(wanted.to_string()))?,
        None => 0,
    };
    let reference = scenarios
        .get(reference_index)
        .map(|scenario| scenario.name.clone())
        .ok_or(CompareError::NoScenarios)?;

    let rows = scenarios
        .iter()
        .map(|scenario| {
            debug!(
                scenario = %scenario.name,
                missing = missing_columns(&scenario.table, &INDICATORS),
                "indicator columns absent"
            );
            let mut row = extract(&scenario.table, &INDICATORS);
            let derived = derive_metrics(&row);
            merge(&mut row, derived);
            (scenario.name.clone(), scenario.source.clone(), row)
        })
        .collect();

    let table = ComparisonTable::from_rows(rows);
    let deltas = delta_table(&table, reference_index);
    debug!(
        scenarios = table.scenarios.len(),
        metrics = table.metrics.len(),
        %reference,
        "comparison computed"
    );

    Ok(Comparison {
        table,
        deltas,
        reference,
    })
}

fn find_reference(scenarios: &[ScenarioInput], wanted: &str) -> Option<usize> {
    scenarios.iter().position(|scenario| scenario.name == wanted).or_else(|| {
        scenarios.iter().position(|scenario| {
            scenario
                .source
                .as_deref()
                .and_then(Path::file_name)
                .is_some_and(|name| name == wanted)
        })
    })
}

fn merge(row: &mut MetricRow, derived: MetricRow) {
    for (key, value) in derived.iter() {
        row.insert(key, value);
    }
}

/// Compares the scenario workbooks of `config.input_dir` and writes the
/// report. Nothing is written when no input is found.
#[instrument(
    level = "info",
    skip_all,
    fields(input_dir = %config.input_dir.display())
)]
pub fn run(config: &CompareConfig) -> Result<(Comparison, PathBuf)> {
    let output = config.output_path();
    let files = discover_inputs(&config.input_dir, Some(&output))?;
    if files.is_empty() {
        return Err(CompareError::NoInputFiles(config.input_dir.clone()));
    }
    info!(file_count = files.len(), "scenario workbooks found");

    let scenarios = load_scenarios(&files, config)?;
    let comparison = compare_scenarios(&scenarios, config.reference.as_deref())?;

    let report = build_report(&comparison.table, &comparison.deltas, &comparison.reference);
    excel_write::write_report(&output, &report, &config.column_widths)?;
    info!(output = %output.display(), sheets = report.sheets.len(), "report written");

    Ok((comparison, output))
}
