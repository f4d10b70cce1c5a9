// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report configuration.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envreport.toml (cwd, optional)
//! 3. --config FILE
//! 4. ENVREPORT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # File Format
//!
//! ```toml
//! level = 3
//! variables = ["PATH", "HOME"]
//!
//! [warnings]
//! empty = true
//! missing = true
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVREPORT_LEVEL=4                 → level = 4
//! ENVREPORT_VARIABLES=PATH,HOME     → variables = ["PATH", "HOME"]
//! ENVREPORT_WARNINGS_MISSING=true   → warnings.missing = true
//! ENVREPORT_ANYTHING_ELSE=...       → ignored
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::logging::LogLevel;
use crate::report::{ReportOptions, WarningPolicy};

use loader::ConfigLoader;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envreport.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "ENVREPORT";

/// Complete report configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Level of non-warning records (0-6).
    pub level: LogLevel,
    /// Names to report. Empty reports every variable.
    pub variables: Vec<String>,
    /// Warning policy for selected variables.
    pub warnings: WarningPolicy,
}

impl ReportConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envreport::config::ReportConfig;
    ///
    /// let config = ReportConfig::builder()
    ///     .add_toml_file_optional("envreport.toml")
    ///     .with_env_prefix("ENVREPORT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `ReportConfig` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `ReportConfig` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Converts into the options consumed by [`crate::report::report`].
    ///
    /// Empty names are dropped, so `ENVREPORT_VARIABLES=` still reports
    /// every variable.
    #[must_use]
    pub fn to_options(&self) -> ReportOptions {
        ReportOptions::builder()
            .with_level(self.level)
            .with_variables(
                self.variables
                    .iter()
                    .filter(|name| !name.is_empty())
                    .cloned()
                    .collect(),
            )
            .with_warnings(self.warnings)
            .build()
    }

    /// Format configuration options for display.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let options = [
            ("level", self.level.as_u8().to_string()),
            ("variables", self.variables.join(",")),
            ("warnings.empty", self.warnings.empty.to_string()),
            ("warnings.missing", self.warnings.missing.to_string()),
        ];

        let max_key_len = options.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
