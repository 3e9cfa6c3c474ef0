//! Indicator extraction: column lookup, numeric coercion and aggregation.

use crate::catalog::{Aggregation, ColumnKey, Indicator};
use crate::model::{Cell, MetricRow, Table};

/// Extracts one value per catalog entry from `table`.
///
/// The result always holds exactly one key per indicator, in catalog order.
/// Indicators whose column is missing from the table map to `None`.
pub fn extract(table: &Table, catalog: &[Indicator]) -> MetricRow {
    let mut row = MetricRow::new();

    for indicator in catalog {
        let value = find_column(table, &indicator.column).and_then(|index| {
            aggregate(
                indicator.aggregation,
                table.column(index).filter_map(coerce),
            )
        });
        row.insert(indicator.metric.key(), value);
    }

    row
}

/// Number of catalog entries whose column is absent from `table`.
pub fn missing_columns(table: &Table, catalog: &[Indicator]) -> usize {
    catalog
        .iter()
        .filter(|indicator| find_column(table, &indicator.column).is_none())
        .count()
}

/// Position of the first header that parses to `key`.
pub fn find_column(table: &Table, key: &ColumnKey<'_>) -> Option<usize> {
    table
        .columns
        .iter()
        .position(|header| ColumnKey::parse(header).as_ref() == Some(key))
}

/// Converts a raw cell to a number, or `None` when it carries no usable value.
///
/// Text is trimmed and parsed; booleans count as 1 and 0. Non-finite numbers
/// are treated as missing.
pub fn coerce(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Number(value) => *value,
        Cell::Boolean(value) => f64::from(u8::from(*value)),
        Cell::Text(text) => text.trim().parse::<f64>().ok()?,
        Cell::Empty => return None,
    };
    value.is_finite().then_some(value)
}

/// Reduces the coerced values of one column.
///
/// `Sum` of nothing is `0`; `Mean` and `Max` of nothing are `None`.
pub fn aggregate(aggregation: Aggregation, values: impl Iterator<Item = f64>) -> Option<f64> {
    match aggregation {
        Aggregation::Sum => Some(values.sum()),
        Aggregation::Mean => {
            let (total, count) = values.fold((0.0, 0usize), |(total, count), value| {
                (total + value, count + 1)
            });
            (count > 0).then(|| total / count as f64)
        }
        Aggregation::Max => values.reduce(f64::max),
    }
}
