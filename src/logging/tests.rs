// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, SETUP_TARGET, console_directives};
use tracing::Level;

#[test]
fn test_log_level_new_rejects_out_of_range() {
    assert_eq!(LogLevel::new(2).unwrap(), LogLevel::WARN);
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'level': log level must be 0-6, got 7");
}

#[test]
fn test_log_level_conversion() {
    let conversions: Vec<String> = (0..=7)
        .map(|raw| match LogLevel::from_u8(raw) {
            Some(level) => format!(
                "{raw} => {} {}",
                level.to_filter_string(),
                level
                    .to_tracing_level()
                    .map_or_else(|| "-".to_string(), |l| l.to_string())
            ),
            None => format!("{raw} => invalid"),
        })
        .collect();

    insta::assert_snapshot!(conversions.join("\n"), @r"
    0 => off -
    1 => error ERROR
    2 => warn WARN
    3 => info INFO
    4 => debug DEBUG
    5 => trace TRACE
    6 => trace TRACE
    7 => invalid
    ");
}

#[test]
fn test_log_level_silent() {
    assert!(LogLevel::SILENT.is_silent());
    assert!(!LogLevel::ERROR.is_silent());
    assert_eq!(LogLevel::DUMP.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_level_serde() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let parsed: Wrapper = serde_json::from_str(r#"{"level": 4}"#).unwrap();
    assert_eq!(parsed.level, LogLevel::DEBUG);

    let err = serde_json::from_str::<Wrapper>(r#"{"level": 9}"#)
        .err()
        .map(|e| e.to_string());
    assert!(err.is_some_and(|msg| msg.contains("log level must be 0-6")));

    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(config.show_timestamps());
    assert!(!config.show_target());
    assert!(!config.json());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("out/envreport.log".to_string())
        .with_json(true)
        .with_show_timestamps(false)
        .build();

    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("out/envreport.log"));
    assert!(config.json());
    assert!(!config.show_timestamps());
}

#[test]
fn test_console_directives_hide_setup_target() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .build();
    insta::assert_snapshot!(console_directives(&config), @"debug,envreport::setup=off");
    assert!(console_directives(&config).ends_with(&format!("{SETUP_TARGET}=off")));
}
