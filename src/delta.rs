//! Percentage deviation of every scenario from a reference scenario.

use crate::derive::round1;
use crate::model::{ComparisonTable, Scenario};

/// Relative deviation of `value` from `reference`, in percent, one decimal.
///
/// `None` when either side is null, the reference is zero or not finite, or
/// the result is not a finite number.
pub fn percent_delta(value: Option<f64>, reference: Option<f64>) -> Option<f64> {
    let reference = reference.filter(|reference| reference.is_finite() && *reference != 0.0)?;
    let delta = round1((value? - reference) / reference.abs() * 100.0);
    delta.is_finite().then_some(delta)
}

/// Builds the delta table of `table` against the scenario at `reference`.
///
/// The result has the same shape as the input. An out of range `reference`
/// yields an all-null table.
pub fn delta_table(table: &ComparisonTable, reference: usize) -> ComparisonTable {
    let reference_values = table.scenarios.get(reference).map(|scenario| &scenario.values);

    let scenarios = table
        .scenarios
        .iter()
        .map(|scenario| Scenario {
            name: scenario.name.clone(),
            source: scenario.source.clone(),
            values: scenario
                .values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    let reference = reference_values
                        .and_then(|values| values.get(index).copied().flatten());
                    percent_delta(*value, reference)
                })
                .collect(),
        })
        .collect();

    ComparisonTable {
        metrics: table.metrics.clone(),
        scenarios,
    }
}
