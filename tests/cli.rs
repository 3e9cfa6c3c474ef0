mod common;

use std::process::Command;

use antares_compare::catalog::{GAS, NUCLEAR};
use antares_compare::config::DEFAULT_OUTPUT_NAME;
use common::write_input;
use tempfile::tempdir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_antares-compare"))
}

#[test]
fn exits_with_failure_when_no_workbook_is_found() {
    let temp_dir = tempdir().expect("temporary directory");

    let output = binary()
        .arg("--input-dir")
        .arg(temp_dir.path())
        .output()
        .expect("binary executed");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no .xlsx file found"), "stderr: {stderr}");
    assert!(!temp_dir.path().join(DEFAULT_OUTPUT_NAME).exists());
}

#[test]
fn writes_report_and_prints_summary() {
    let temp_dir = tempdir().expect("temporary directory");
    write_input(
        &temp_dir.path().join("14_reaccteurs.xlsx"),
        &[(&NUCLEAR, &[100.0]), (&GAS, &[50.0])],
    );
    write_input(
        &temp_dir.path().join("12_reacteurs.xlsx"),
        &[(&NUCLEAR, &[80.0]), (&GAS, &[70.0])],
    );

    let output = binary()
        .arg("--input-dir")
        .arg(temp_dir.path())
        .arg("--reference")
        .arg("14_reaccteurs.xlsx")
        .output()
        .expect("binary executed");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(temp_dir.path().join(DEFAULT_OUTPUT_NAME).exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SYNTHÈSE RAPIDE"));
    assert!(stdout.contains("14 EPR (référence)"));
    assert!(stdout.contains("12 EPR"));
}

#[test]
fn rejects_malformed_name_override() {
    let temp_dir = tempdir().expect("temporary directory");

    let output = binary()
        .arg("--input-dir")
        .arg(temp_dir.path())
        .arg("--name")
        .arg("no-label")
        .output()
        .expect("binary executed");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FILE=LABEL"), "stderr: {stderr}");
}
