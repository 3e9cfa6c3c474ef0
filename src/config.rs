use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CompareError, Result};

/// File name of the report written into the input directory by default.
pub const DEFAULT_OUTPUT_NAME: &str = "comparaison_scenarios_EPR.xlsx";

/// Everything a comparison run needs to know, passed explicitly to
/// [`compare::run`](crate::compare::run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Directory holding the scenario workbooks.
    pub input_dir: PathBuf,
    /// Report path; defaults to [`DEFAULT_OUTPUT_NAME`] inside `input_dir`.
    pub output: Option<PathBuf>,
    /// Display name per input file name.
    pub scenario_names: BTreeMap<String, String>,
    /// Reference scenario, by display name or file name. Defaults to the
    /// first scenario.
    pub reference: Option<String>,
    pub column_widths: ColumnWidths,
}

impl Default for CompareConfig {
    fn default() -> Self {
        let scenario_names = [
            ("14_reaccteurs.xlsx", "14 EPR (référence)"),
            ("12_reacteurs.xlsx", "12 EPR"),
            ("10_reacteurs.xlsx", "10 EPR"),
        ]
        .into_iter()
        .map(|(file, name)| (file.to_string(), name.to_string()))
        .collect();

        Self {
            input_dir: PathBuf::from("."),
            output: None,
            scenario_names,
            reference: None,
            column_widths: ColumnWidths::default(),
        }
    }
}

/// Report column widths, in Excel character units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnWidths {
    /// Metric label column.
    pub first: f64,
    /// Scenario columns.
    pub other: f64,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            first: 35.0,
            other: 18.0,
        }
    }
}

impl CompareConfig {
    /// Loads a JSON configuration file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CompareError::MissingInput(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input_dir.join(DEFAULT_OUTPUT_NAME))
    }

    /// Display name of an input file: the configured override, else the file
    /// stem with underscores turned into spaces.
    pub fn display_name(&self, path: &Path) -> String {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some(name) = self.scenario_names.get(&file_name) {
            return name.clone();
        }

        path.file_stem()
            .map(|stem| stem.to_string_lossy().replace('_', " "))
            .unwrap_or(file_name)
    }

    /// Applies a `FILE=LABEL` override.
    pub fn apply_name_override(&mut self, raw: &str) -> Result<()> {
        let (file, label) = raw
            .split_once('=')
            .map(|(file, label)| (file.trim(), label.trim()))
            .filter(|(file, label)| !file.is_empty() && !label.is_empty())
            .ok_or_else(|| CompareError::InvalidNameOverride(raw.to_string()))?;
        self.scenario_names
            .insert(file.to_string(), label.to_string());
        Ok(())
    }
}
