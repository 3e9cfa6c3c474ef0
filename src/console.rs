use std::fmt::Write;

use crate::catalog::CONSOLE_SUMMARY;
use crate::model::ComparisonTable;
use crate::report::transpose;

const RULE_WIDTH: usize = 60;

/// Renders the quick summary printed after the report is written: the console
/// key metrics as rows, scenarios as right-aligned columns.
pub fn render_summary(table: &ComparisonTable) -> String {
    let view = transpose(String::new(), table, Some(CONSOLE_SUMMARY.as_slice()));

    let cells: Vec<(String, Vec<String>)> = view
        .rows
        .iter()
        .map(|(metric, values)| {
            let values = values.iter().map(|value| format_value(*value)).collect();
            (metric.clone(), values)
        })
        .collect();

    let label_width = cells
        .iter()
        .map(|(metric, _)| metric.chars().count())
        .max()
        .unwrap_or(0);
    let column_widths: Vec<usize> = view
        .columns
        .iter()
        .enumerate()
        .map(|(index, name)| {
            cells
                .iter()
                .map(|(_, values)| values[index].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}\nSYNTHÈSE RAPIDE\n{rule}");

    let _ = write!(out, "{}", " ".repeat(label_width));
    for (name, width) in view.columns.iter().zip(&column_widths) {
        let _ = write!(out, "  {}", pad_left(name, *width));
    }
    out.push('\n');

    for (metric, values) in &cells {
        let _ = write!(out, "{}", pad_right(metric, label_width));
        for (value, width) in values.iter().zip(&column_widths) {
            let _ = write!(out, "  {}", pad_left(value, *width));
        }
        out.push('\n');
    }

    out
}

/// Formats a value with thousands separators and one decimal; nulls print
/// as `NaN`.
pub fn format_value(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "NaN".to_string();
    };

    let formatted = format!("{:.1}", value.abs());
    let (integer, decimals) = formatted.split_once('.').unwrap_or((formatted.as_str(), "0"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.0" { "-" } else { "" };
    format!("{sign}{grouped}.{decimals}")
}

// Widths count chars so accented labels line up.
fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{text}", " ".repeat(fill))
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}
