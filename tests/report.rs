mod common;

use std::fs;

use antares_compare::catalog::{self, CO2_EMISSIONS, GAS, LOLD, NUCLEAR};
use antares_compare::compare::{self, discover_inputs};
use antares_compare::config::{CompareConfig, DEFAULT_OUTPUT_NAME};
use antares_compare::console::{format_value, render_summary};
use antares_compare::report::{build_report, sanitize_sheet_name};
use antares_compare::CompareError;
use calamine::{DataType, Reader, Xlsx, open_workbook};
use common::write_input;
use tempfile::tempdir;

fn write_two_scenarios(dir: &std::path::Path) {
    write_input(
        &dir.join("scenario_a.xlsx"),
        &[
            (&NUCLEAR, &[60.0, 40.0]),
            (&GAS, &[50.0, 0.0]),
            (&CO2_EMISSIONS, &[4.0, 6.0]),
        ],
    );
    write_input(
        &dir.join("scenario_b.xlsx"),
        &[
            (&NUCLEAR, &[80.0, 0.0]),
            (&GAS, &[35.0, 35.0]),
            (&CO2_EMISSIONS, &[20.0, 0.0]),
        ],
    );
}

fn config_for(dir: &std::path::Path) -> CompareConfig {
    CompareConfig {
        input_dir: dir.to_path_buf(),
        ..CompareConfig::default()
    }
}

#[test]
fn report_contains_three_transposed_sheets() {
    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());

    let (comparison, output) = compare::run(&config_for(temp_dir.path())).expect("comparison run");
    assert_eq!(output, temp_dir.path().join(DEFAULT_OUTPUT_NAME));
    assert_eq!(comparison.reference, "scenario a");

    let mut workbook: Xlsx<_> = open_workbook(&output).expect("report opened");
    assert_eq!(
        workbook.sheet_names().to_vec(),
        vec!["Valeurs absolues", "Delta % vs scenario a", "Synthèse clés"]
    );

    let absolute = workbook
        .worksheet_range("Valeurs absolues")
        .expect("absolute sheet")
        .expect("absolute sheet read");
    let rows: Vec<&[DataType]> = absolute.rows().collect();
    assert_eq!(rows[0][1], DataType::String("scenario a".into()));
    assert_eq!(rows[0][2], DataType::String("scenario b".into()));
    assert_eq!(rows.len(), 1 + comparison.table.metrics.len());

    let nuclear = rows
        .iter()
        .find(|row| row[0] == DataType::String(NUCLEAR.metric.key()))
        .expect("nuclear row");
    assert_eq!(nuclear[1], DataType::Float(100.0));
    assert_eq!(nuclear[2], DataType::Float(80.0));

    let lold = rows
        .iter()
        .find(|row| row[0] == DataType::String(LOLD.metric.key()))
        .expect("LOLD row");
    assert_eq!(lold[1], DataType::Empty);

    let deltas = workbook
        .worksheet_range("Delta % vs scenario a")
        .expect("delta sheet")
        .expect("delta sheet read");
    let co2 = deltas
        .rows()
        .find(|row| row[0] == DataType::String(CO2_EMISSIONS.metric.key()))
        .expect("CO2 row")
        .to_vec();
    assert_eq!(co2[1], DataType::Float(0.0));
    assert_eq!(co2[2], DataType::Float(100.0));

    let synthesis = workbook
        .worksheet_range("Synthèse clés")
        .expect("synthesis sheet")
        .expect("synthesis sheet read");
    let labels: Vec<String> = synthesis
        .rows()
        .skip(1)
        .map(|row| row[0].to_string())
        .collect();
    let expected: Vec<String> = catalog::KEY_SYNTHESIS.iter().map(|metric| metric.key()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn second_run_ignores_previous_report() {
    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());
    let config = config_for(temp_dir.path());

    let (first, output) = compare::run(&config).expect("first run");
    assert!(output.exists());
    let (second, _) = compare::run(&config).expect("second run");

    assert_eq!(first, second);
    assert_eq!(second.table.scenarios.len(), 2);
}

#[test]
fn discovery_sorts_and_filters_workbooks() {
    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());
    fs::write(temp_dir.path().join("notes.txt"), "ignored").expect("text file");
    fs::write(temp_dir.path().join("~$scenario_a.xlsx"), "lock").expect("lock file");

    let files = discover_inputs(temp_dir.path(), None).expect("inputs listed");
    let names: Vec<String> = files
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["scenario_a.xlsx", "scenario_b.xlsx"]);
}

#[test]
fn empty_directory_fails_without_writing_a_report() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());

    let error = compare::run(&config).expect_err("no input");
    assert!(matches!(error, CompareError::NoInputFiles(_)));
    assert!(!config.output_path().exists());
}

#[test]
fn configured_names_and_reference_are_applied() {
    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());
    let mut config = config_for(temp_dir.path());
    config
        .apply_name_override("scenario_b.xlsx = Baseline")
        .expect("override parsed");
    config.reference = Some("Baseline".to_string());
    config.output = Some(temp_dir.path().join("out").with_extension("xlsx"));

    let (comparison, output) = compare::run(&config).expect("comparison run");
    assert_eq!(comparison.reference, "Baseline");
    assert_eq!(
        comparison.deltas.value("scenario a", &NUCLEAR.metric.key()),
        Some(25.0)
    );

    let workbook: Xlsx<_> = open_workbook(&output).expect("report opened");
    assert!(workbook.sheet_names().iter().any(|name| name == "Delta % vs Baseline"));

    assert!(matches!(
        config.apply_name_override("missing-separator"),
        Err(CompareError::InvalidNameOverride(_))
    ));
}

#[test]
fn duplicate_display_names_are_rejected() {
    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());
    let mut config = config_for(temp_dir.path());
    config.apply_name_override("scenario_a.xlsx=Same").expect("override parsed");
    config.apply_name_override("scenario_b.xlsx=Same").expect("override parsed");

    let error = compare::run(&config).expect_err("duplicate names");
    assert!(matches!(error, CompareError::DuplicateScenario(name) if name == "Same"));
}

#[test]
fn config_file_overrides_defaults() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "input_dir": "runs", "reference": "12 EPR", "column_widths": { "first": 40 } }"#,
    )
    .expect("config written");

    let config = CompareConfig::from_json_file(&path).expect("config loaded");
    assert_eq!(config.input_dir, std::path::PathBuf::from("runs"));
    assert_eq!(config.reference.as_deref(), Some("12 EPR"));
    assert_eq!(config.column_widths.first, 40.0);
    assert_eq!(config.column_widths.other, 18.0);
    assert_eq!(
        config.display_name(std::path::Path::new("runs/12_reacteurs.xlsx")),
        "12 EPR"
    );
    assert_eq!(
        config.display_name(std::path::Path::new("runs/8_reacteurs_bis.xlsx")),
        "8 reacteurs bis"
    );
}

#[test]
fn long_reference_names_give_valid_sheet_names() {
    assert_eq!(sanitize_sheet_name("Delta % vs a/b"), "Delta % vs a_b");
    assert_eq!(sanitize_sheet_name("   "), "Sheet");
    let long = sanitize_sheet_name("Delta % vs scénario de référence très long");
    assert_eq!(long.chars().count(), 31);

    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());
    let files = discover_inputs(temp_dir.path(), None).expect("inputs listed");
    let scenarios =
        compare::load_scenarios(&files, &config_for(temp_dir.path())).expect("scenarios loaded");
    let comparison = compare::compare_scenarios(&scenarios, None).expect("comparison");
    let report = build_report(&comparison.table, &comparison.deltas, "Valeurs absolues");
    let names: Vec<&str> = report
        .sheets
        .iter()
        .map(|sheet| sheet.sheet_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Valeurs absolues", "Delta % vs Valeurs absolues", "Synthèse clés"]
    );
    assert_eq!(
        report.sheets[2].row(&NUCLEAR.metric.key()),
        Some([Some(100.0), Some(80.0)].as_slice())
    );
}

#[test]
fn console_summary_lists_key_metrics() {
    assert_eq!(format_value(Some(1234567.26)), "1,234,567.3");
    assert_eq!(format_value(Some(-1234.0)), "-1,234.0");
    assert_eq!(format_value(Some(-0.01)), "0.0");
    assert_eq!(format_value(Some(999.96)), "1,000.0");
    assert_eq!(format_value(None), "NaN");

    let temp_dir = tempdir().expect("temporary directory");
    write_two_scenarios(temp_dir.path());
    let (comparison, _) = compare::run(&config_for(temp_dir.path())).expect("comparison run");

    let summary = render_summary(&comparison.table);
    assert!(summary.contains("SYNTHÈSE RAPIDE"));
    assert!(summary.contains("scenario a"));
    assert!(summary.contains(&NUCLEAR.metric.key()));
    assert!(summary.contains(&catalog::CO2_INTENSITY.key()));
    assert!(!summary.contains(&catalog::FOSSIL_SHARE.key()));
}

#[test]
fn truncated_sheet_names_never_end_with_an_apostrophe() {
    let raw = format!("Delta % vs {}'hiver", "a".repeat(19));
    assert_eq!(raw.chars().nth(30), Some('\''));
    let name = sanitize_sheet_name(&raw);
    assert_eq!(name, format!("Delta % vs {}", "a".repeat(19)));
    assert_eq!(sanitize_sheet_name("'''"), "Sheet");
    assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");

    let temp_dir = tempdir().expect("temporary directory");
    write_input(
        &temp_dir.path().join(format!("{}'hiver.xlsx", "a".repeat(19))),
        &[(&NUCLEAR, &[100.0])],
    );
    write_input(&temp_dir.path().join("scenario_b.xlsx"), &[(&NUCLEAR, &[80.0])]);

    let (comparison, output) = compare::run(&config_for(temp_dir.path())).expect("comparison run");
    assert_eq!(comparison.reference, format!("{}'hiver", "a".repeat(19)));

    let workbook: Xlsx<_> = open_workbook(&output).expect("report opened");
    assert!(workbook.sheet_names().iter().any(|sheet| *sheet == name));
}
