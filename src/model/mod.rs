use std::path::PathBuf;

/// Raw cell value as handed over by the tabular reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell.
    Empty,
    /// Numeric cell.
    Number(f64),
    /// Boolean cell.
    Boolean(bool),
    /// Text cell, possibly holding a number written as text.
    Text(String),
}

/// One worksheet of an input workbook: a header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Iterates over the cells of one column. Short rows yield no cell.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

/// Ordered metric key → value mapping for one scenario.
///
/// A `None` value means the metric could not be computed for the scenario,
/// while the key itself stays present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRow {
    entries: Vec<(String, Option<f64>)>,
}

impl MetricRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value, keeping the first insertion position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<f64>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored for `key`, flattening absent keys and nulls.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| *value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One compared scenario: a display name and its metric values, aligned with
/// the owning table's metric keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub source: Option<PathBuf>,
    pub values: Vec<Option<f64>>,
}

/// Scenarios × metrics table.
///
/// Every scenario holds exactly one value per metric key, in `metrics` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    pub metrics: Vec<String>,
    pub scenarios: Vec<Scenario>,
}

impl ComparisonTable {
    /// Aligns the given rows on the union of their keys, in first-seen order.
    pub fn from_rows(rows: Vec<(String, Option<PathBuf>, MetricRow)>) -> Self {
        let mut metrics: Vec<String> = Vec::new();
        for (_, _, row) in &rows {
            for key in row.keys() {
                if !metrics.iter().any(|existing| existing == key) {
                    metrics.push(key.to_string());
                }
            }
        }

        let scenarios = rows
            .into_iter()
            .map(|(name, source, row)| Scenario {
                values: metrics.iter().map(|key| row.get(key)).collect(),
                name,
                source,
            })
            .collect();

        Self { metrics, scenarios }
    }

    pub fn metric_index(&self, key: &str) -> Option<usize> {
        self.metrics.iter().position(|metric| metric == key)
    }

    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.name == name)
    }

    /// Value of `metric` for `scenario`, `None` when either is unknown or null.
    pub fn value(&self, scenario: &str, metric: &str) -> Option<f64> {
        let index = self.metric_index(metric)?;
        self.scenario(scenario)?.values.get(index).copied().flatten()
    }

    /// Values of one metric across all scenarios, in scenario order.
    pub fn metric_values(&self, index: usize) -> Vec<Option<f64>> {
        self.scenarios
            .iter()
            .map(|scenario| scenario.values.get(index).copied().flatten())
            .collect()
    }
}
