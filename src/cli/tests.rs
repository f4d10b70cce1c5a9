// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::config::loader::ConfigLoader;
use crate::logging::LogLevel;
use crate::report::WarningPolicy;
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_no_arguments() {
    let cli = Cli::try_parse_from(["envreport"]).unwrap();
    assert!(cli.variables.is_empty());
    assert!(!cli.warn_empty);
    assert!(!cli.warn_missing);
    assert!(cli.level.is_none());
    assert!(cli.configs.is_empty());
}

#[test]
fn test_parse_variables_and_warnings() {
    let cli = Cli::try_parse_from([
        "envreport",
        "--warn-empty",
        "--warn-missing",
        "-L",
        "4",
        "PATH",
        "HOME",
    ])
    .unwrap();

    assert_eq!(cli.variables, ["PATH", "HOME"]);
    assert!(cli.warn_empty);
    assert!(cli.warn_missing);
    assert_eq!(cli.level, Some(4));
}

#[test]
fn test_parse_logging_options() {
    let cli = Cli::try_parse_from([
        "envreport",
        "-l",
        "5",
        "--log-file",
        "logs/env.log",
        "--json",
        "--no-timestamps",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
    ])
    .unwrap();

    assert_eq!(cli.log_level, Some(5));
    assert_eq!(cli.log_file.as_deref(), Some("logs/env.log".as_ref()));
    assert!(cli.json);
    assert!(cli.no_timestamps);
    assert_eq!(cli.configs.len(), 2);
}

#[test]
fn test_parse_rejects_out_of_range_level() {
    assert!(Cli::try_parse_from(["envreport", "--level", "7"]).is_err());
    assert!(Cli::try_parse_from(["envreport", "--log-level", "9"]).is_err());
}

#[test]
fn test_overrides_apply_over_config() {
    let cli = Cli::try_parse_from(["envreport", "--warn-missing", "-L", "2", "TEST"]).unwrap();
    let loader = ConfigLoader::new().add_toml_str(
        "variables = [\"PATH\"]\nlevel = 4\n[warnings]\nempty = true",
    );

    let config = cli.apply_overrides(loader).build().unwrap();

    assert_eq!(config.variables, ["TEST"]);
    assert_eq!(config.level, LogLevel::WARN);
    assert_eq!(config.warnings, WarningPolicy::new(true, true));
}

#[test]
fn test_absent_flags_keep_config() {
    let cli = Cli::try_parse_from(["envreport"]).unwrap();
    let loader = ConfigLoader::new()
        .add_toml_str("variables = [\"PATH\"]\n[warnings]\nmissing = true");

    let config = cli.apply_overrides(loader).build().unwrap();

    assert_eq!(config.variables, ["PATH"]);
    assert_eq!(config.warnings, WarningPolicy::new(false, true));
}
