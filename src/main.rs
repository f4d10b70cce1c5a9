// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> report_process_env
//! ```

use std::process::ExitCode;

use envreport::cli::{self, Cli};
use envreport::config::loader::ConfigLoader;
use envreport::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ReportConfig};
use envreport::logging::{LogConfig, LogLevel, SETUP_TARGET, init_logging};
use envreport::report::report_process_env;

fn main() -> ExitCode {
    let cli = cli::parse();

    let (config, files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if cli.show_config {
        for line in files.iter().chain(&config.format_options()) {
            println!("{line}");
        }
        return ExitCode::SUCCESS;
    }

    let _log_guard = match init_logging(&build_log_config(&cli, &config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(target: SETUP_TARGET, files = ?files, "configuration loaded");
    report_process_env(&config.to_options());

    ExitCode::SUCCESS
}

fn build_log_config(cli: &Cli, config: &ReportConfig) -> LogConfig {
    // Keep reported records visible unless the console level is given.
    let console_level = cli
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or_else(|| {
            LogLevel::from_u8(config.level.as_u8().max(LogLevel::INFO.as_u8()))
                .unwrap_or_default()
        });

    let file_level = cli
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(cli.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json(cli.json)
        .with_show_timestamps(!cli.no_timestamps)
        .build()
}

fn build_config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !cli.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &cli.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(cli: &Cli) -> envreport::error::Result<(ReportConfig, Vec<String>)> {
    let loader = cli.apply_overrides(build_config_loader(cli));
    let files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok((config, files))
}
