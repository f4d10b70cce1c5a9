// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envreport using clap derive.
//!
//! # Option Precedence
//!
//! ```text
//! envreport [options] [VARIABLE...]
//!
//! VARIABLE...        ← variables (all when omitted)
//! --warn-empty       ← warnings.empty = true
//! --warn-missing     ← warnings.missing = true
//! --level N          ← level of reported records (0-6)
//! --config FILE      ← Additional config files (can repeat)
//!
//! Precedence: CLI flags > ENVREPORT_* > --config > envreport.toml > defaults
//! ```

#[cfg(test)]
mod tests;

use clap::Parser;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;

/// Environment Variable Reporter
///
/// Logs environment variables as structured records.
#[derive(Debug, Parser)]
#[command(
    name = "envreport",
    author,
    version,
    about = "Report environment variables as structured log records",
    long_about = "envreport Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Logs every environment variable, or only the named ones.\n\
                  With --warn-empty and --warn-missing, named variables that are\n\
                  set to an empty string or not set at all are reported as\n\
                  warnings instead of being skipped.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envreport loads `envreport.toml` from the current\n\
                  directory if it exists. Additional files can be given with\n\
                  --config, later files override earlier ones. ENVREPORT_*\n\
                  environment variables override files, and command line flags\n\
                  override everything. Use --no-default-config to skip\n\
                  `envreport.toml`."
)]
pub struct Cli {
    /// Variables to report. Every variable is reported when none are given.
    #[arg(value_name = "VARIABLE")]
    pub variables: Vec<String>,

    /// Warn when a named variable is set to an empty string.
    #[arg(long)]
    pub warn_empty: bool,

    /// Warn when a named variable is not set.
    #[arg(long)]
    pub warn_missing: bool,

    /// Level of reported records (1=error, 2=warn, 3=info, 4=debug, 5=trace).
    #[arg(short = 'L', long = "level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub level: Option<u8>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of `envreport.toml`, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes console records as newline-delimited JSON.
    #[arg(long)]
    pub json: bool,

    /// Omits timestamps from console records.
    #[arg(long = "no-timestamps")]
    pub no_timestamps: bool,

    /// Prints the effective configuration and the files it came from, then exits.
    #[arg(long = "show-config")]
    pub show_config: bool,
}

impl Cli {
    /// Applies command-line flags on top of the loader's other sources.
    ///
    /// Flags only ever enable warnings; absent flags leave the configured
    /// value untouched.
    #[must_use]
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if !self.variables.is_empty() {
            loader = loader.set("variables", self.variables.clone());
        }
        if self.warn_empty {
            loader = loader.set("warnings.empty", true);
        }
        if self.warn_missing {
            loader = loader.set("warnings.missing", true);
        }
        if let Some(level) = self.level {
            loader = loader.set("level", i64::from(level));
        }
        loader
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
