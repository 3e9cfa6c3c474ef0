//! Ratios and intensities computed from the extracted indicators.

use crate::catalog::{self, CO2_EMISSIONS, FOSSIL_SOURCES, Indicator, NUCLEAR, PRODUCTION_SOURCES};
use crate::model::MetricRow;

/// Computes the derived metrics for one scenario.
///
/// The total production is always emitted. Shares and the CO2 intensity are
/// omitted when the total production is not strictly positive.
pub fn derive_metrics(row: &MetricRow) -> MetricRow {
    let mut derived = MetricRow::new();

    let total = sum_of(row, &PRODUCTION_SOURCES);
    derived.insert(catalog::TOTAL_PRODUCTION.key(), Some(total));

    if total > 0.0 {
        derived.insert(
            catalog::NUCLEAR_SHARE.key(),
            finite(round1(value_of(row, &NUCLEAR) / total * 100.0)),
        );
        derived.insert(
            catalog::FOSSIL_SHARE.key(),
            finite(round1(sum_of(row, &FOSSIL_SOURCES) / total * 100.0)),
        );
        derived.insert(
            catalog::CO2_INTENSITY.key(),
            finite(round1(value_of(row, &CO2_EMISSIONS) * 1000.0 / total)),
        );
    }

    derived
}

/// Rounds to one decimal, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn value_of(row: &MetricRow, indicator: &Indicator) -> f64 {
    row.get(&indicator.metric.key()).unwrap_or(0.0)
}

fn sum_of(row: &MetricRow, indicators: &[Indicator]) -> f64 {
    indicators
        .iter()
        .map(|indicator| value_of(row, indicator))
        .sum()
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
