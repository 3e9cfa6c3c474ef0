use std::collections::HashSet;

use crate::catalog::{KEY_SYNTHESIS, Metric};
use crate::model::ComparisonTable;

/// Sheet holding the absolute values.
pub const ABSOLUTE_SHEET: &str = "Valeurs absolues";
/// Sheet holding the curated key metrics.
pub const SYNTHESIS_SHEET: &str = "Synthèse clés";

const MAX_SHEET_NAME_LEN: usize = 31;

/// A metrics × scenarios table that will be materialised as an Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    /// Scenario names, one per value column.
    pub columns: Vec<String>,
    /// Metric key followed by one value per scenario.
    pub rows: Vec<(String, Vec<Option<f64>>)>,
}

impl SheetTable {
    pub fn row(&self, metric: &str) -> Option<&[Option<f64>]> {
        self.rows
            .iter()
            .find(|(key, _)| key == metric)
            .map(|(_, values)| values.as_slice())
    }
}

/// All sheets of the comparison report, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub sheets: Vec<SheetTable>,
}

/// Assembles the absolute, delta and key-synthesis sheets.
///
/// Tables are transposed so that metrics become rows and scenarios columns.
pub fn build_report(
    absolute: &ComparisonTable,
    deltas: &ComparisonTable,
    reference: &str,
) -> ReportData {
    let mut sheet_names = SheetNameRegistry::default();

    let absolute_sheet = transpose(sheet_names.assign(ABSOLUTE_SHEET), absolute, None);
    let delta_sheet = transpose(sheet_names.assign(&delta_sheet_name(reference)), deltas, None);
    let synthesis_sheet = transpose(
        sheet_names.assign(SYNTHESIS_SHEET),
        absolute,
        Some(KEY_SYNTHESIS.as_slice()),
    );

    ReportData {
        sheets: vec![absolute_sheet, delta_sheet, synthesis_sheet],
    }
}

/// Name of the delta sheet before sanitising.
pub fn delta_sheet_name(reference: &str) -> String {
    format!("Delta % vs {reference}")
}

/// Metrics × scenarios view of `table`, optionally restricted to `subset`
/// (in subset order, skipping metrics the table does not hold).
pub fn transpose(
    sheet_name: String,
    table: &ComparisonTable,
    subset: Option<&[Metric]>,
) -> SheetTable {
    let indices: Vec<usize> = match subset {
        Some(metrics) => metrics
            .iter()
            .filter_map(|metric| table.metric_index(&metric.key()))
            .collect(),
        None => (0..table.metrics.len()).collect(),
    };

    let rows = indices
        .into_iter()
        .map(|index| (table.metrics[index].clone(), table.metric_values(index)))
        .collect();

    SheetTable {
        sheet_name,
        columns: table
            .scenarios
            .iter()
            .map(|scenario| scenario.name.clone())
            .collect(),
        rows,
    }
}

#[derive(Debug, Default)]
struct SheetNameRegistry {
    used: HashSet<String>,
}

impl SheetNameRegistry {
    fn assign(&mut self, raw: &str) -> String {
        let base = sanitize_sheet_name(raw);
        if self.used.insert(base.to_lowercase()) {
            return base;
        }

        let mut counter = 1;
        loop {
            let suffix = format!("_{counter}");
            let prefix: String = base
                .chars()
                .take(MAX_SHEET_NAME_LEN - suffix.len())
                .collect();
            let candidate = format!("{}{suffix}", trim_sheet_name(&prefix));
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Replaces characters Excel rejects in sheet names and enforces the
/// 31-character limit.
pub fn sanitize_sheet_name(raw: &str) -> String {
    let invalid = [':', '\\', '/', '?', '*', '[', ']'];
    let sanitized: String = raw
        .chars()
        .map(|ch| {
            if invalid.contains(&ch) || ch.is_control() {
                '_'
            } else {
                ch
            }
        })
        .collect();

    let truncated: String = sanitized.chars().take(MAX_SHEET_NAME_LEN).collect();
    let trimmed = trim_sheet_name(&truncated);
    if trimmed.is_empty() {
        return "Sheet".to_string();
    }
    trimmed.to_string()
}

// Excel rejects names that start or end with an apostrophe.
fn trim_sheet_name(name: &str) -> &str {
    name.trim_matches(|ch: char| ch.is_whitespace() || ch == '\'')
}
