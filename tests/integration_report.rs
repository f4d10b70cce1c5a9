// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the reporter.
//!
//! Runs the documented scenarios through the public API with a fixed
//! environment.

use envreport::env::{EnvSnapshot, EnvSource};
use envreport::logging::LogLevel;
use envreport::report::{
    LogRecord, MemorySink, RecordKind, ReportOptions, WarningPolicy, plan, report,
};

fn options(names: &[&str], empty: bool, missing: bool) -> ReportOptions {
    ReportOptions::builder()
        .with_variables(names.iter().map(ToString::to_string).collect())
        .with_warnings(WarningPolicy::new(empty, missing))
        .build()
}

fn run(env: &[&str], options: &ReportOptions) -> Vec<LogRecord> {
    let sink = MemorySink::new();
    report(env, &sink, options);
    sink.take()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn report_dump_includes_path() {
    let env = ["PATH=/usr/bin", "HOME=/home/user", "LANG=C.UTF-8"];
    let records = run(&env, &ReportOptions::default());

    assert_eq!(records.len(), env.len());
    let path: Vec<_> = records.iter().filter(|r| r.key() == "PATH").collect();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].value(), Some("/usr/bin"));
    assert_eq!(path[0].level(), LogLevel::INFO);
}

#[test]
fn report_selected_variable() {
    let records = run(&["TEST=example-value"], &options(&["TEST"], false, false));
    insta::assert_snapshot!(records[0].to_string(), @r#"INFO Environment Variable key="TEST" value="example-value""#);
    assert_eq!(records.len(), 1);
}

#[test]
fn report_empty_variable_warning() {
    let records = run(&["TEST="], &options(&["TEST"], true, false));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level(), LogLevel::WARN);
    assert_eq!(records[0].kind(), RecordKind::Empty);
    assert_eq!(records[0].message(), "Environment Variable Wasn't Set");
    assert_eq!(records[0].fields(), [("key", "TEST")]);
}

#[test]
fn report_missing_variable_warning() {
    let records = run(&["OTHER=1"], &options(&["TEST"], false, true));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level(), LogLevel::WARN);
    assert_eq!(records[0].message(), "Environment Variable Wasn't Found");
    assert_eq!(records[0].key(), "TEST");
}

#[test]
fn report_missing_variable_silent() {
    assert!(run(&["OTHER=1"], &options(&["TEST"], false, false)).is_empty());
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn report_unselected_names_never_appear() {
    let env = ["A=1", "B=2", "C=", "D=4"];
    let records = run(&env, &options(&["B", "C", "Z"], true, true));

    assert!(
        records
            .iter()
            .all(|r| ["B", "C", "Z"].contains(&r.key()))
    );
    assert_eq!(records.len(), 3);
}

#[test]
fn report_dump_ignores_warning_policy() {
    let env = ["EMPTY=", "BROKEN", "SET=1"];
    let with_warnings = ReportOptions::builder()
        .with_warnings(WarningPolicy::new(true, true))
        .build();

    let records = run(&env, &with_warnings);
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.kind() == RecordKind::Dump));
    assert_eq!(records, run(&env, &ReportOptions::default()));
}

#[test]
fn report_plan_matches_emitted_records() {
    let env = ["A=1", "B="];
    let opts = options(&["A", "B", "C"], true, true);

    let planned = plan(&env.as_slice().snapshot(), &opts);
    assert_eq!(planned, run(&env, &opts));
}

#[test]
fn report_trims_names_and_values() {
    let snapshot = EnvSnapshot::from_raw([" TEST = padded "]);
    let records = plan(&snapshot, &options(&["TEST"], false, false));
    assert_eq!(records[0].value(), Some("padded"));
}
