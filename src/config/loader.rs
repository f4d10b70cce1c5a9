// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional()     skipped when absent
//!   .add_toml_file()              NotFound when absent
//!   .add_toml_str()
//!   .with_env_prefix()            only PREFIX_{LEVEL,VARIABLES,WARNINGS_*}
//!   .set()
//!        |
//!        v
//!    build() --> ReportConfig
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat, Map};

use super::ReportConfig;
use crate::error::{ConfigError, Result};

/// Environment keys, after the prefix, that map onto [`ReportConfig`] fields.
const ENV_KEYS: [&str; 4] = ["LEVEL", "VARIABLES", "WARNINGS_EMPTY", "WARNINGS_MISSING"];

/// A TOML source, in the order it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File that must exist.
    File(PathBuf),
    /// File that is read only if present.
    OptionalFile(PathBuf),
    /// TOML text given directly.
    Inline(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline(_) => f.write_str("[string] <string>"),
        }
    }
}

#[derive(Debug, Clone)]
struct EnvOverrides {
    prefix: String,
    vars: Option<Vec<(String, String)>>,
}

impl EnvOverrides {
    /// Keeps only `PREFIX_<KEY>` entries for known keys.
    fn known(&self) -> Map<String, String> {
        let vars = self.vars.clone().unwrap_or_else(|| {
            std::env::vars_os()
                .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
                .collect()
        });

        vars.into_iter()
            .filter(|(name, _)| {
                name.strip_prefix(self.prefix.as_str())
                    .and_then(|rest| rest.strip_prefix('_'))
                    .is_some_and(|key| ENV_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key)))
            })
            .collect()
    }
}

/// Builder for loading configuration from multiple sources.
///
/// Sources are only read by [`ConfigLoader::build`]. Later sources override
/// earlier ones; environment variables override files; [`ConfigLoader::set`]
/// overrides everything.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
    env: Option<EnvOverrides>,
    overrides: Vec<(String, config::Value)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources.push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Adds a TOML file that is ignored when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::OptionalFile(path.as_ref().to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.sources.push(ConfigSource::Inline(content.to_owned()));
        self
    }

    /// Reads `PREFIX_LEVEL`, `PREFIX_VARIABLES` (comma separated),
    /// `PREFIX_WARNINGS_EMPTY` and `PREFIX_WARNINGS_MISSING` from the process
    /// environment. Other `PREFIX_*` variables are ignored.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env = Some(EnvOverrides {
            prefix: prefix.to_owned(),
            vars: None,
        });
        self
    }

    /// Like [`ConfigLoader::with_env_prefix`], reading the given variables
    /// instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(EnvOverrides {
            prefix: prefix.to_owned(),
            vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        });
        self
    }

    /// Sets a configuration override. Invalid keys are reported by `build()`.
    #[must_use]
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Self {
        self.overrides.push((key.to_owned(), value.into()));
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing ([`ConfigError::NotFound`]).
    /// - Configuration files have invalid TOML syntax.
    /// - An override key is invalid.
    /// - The merged configuration cannot be deserialized into `ReportConfig`.
    pub fn build(self) -> Result<ReportConfig> {
        let mut builder = config::Config::builder();

        for source in &self.sources {
            builder = match source {
                ConfigSource::File(path) if !path.exists() => {
                    return Err(ConfigError::NotFound(path.display().to_string()).into());
                }
                ConfigSource::Inline(content) => {
                    builder.add_source(File::from_str(content, FileFormat::Toml))
                }
                // Existence of required files is checked above.
                ConfigSource::File(path) | ConfigSource::OptionalFile(path) => builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                ),
            };
        }

        if let Some(env) = &self.env {
            builder = builder.add_source(
                Environment::with_prefix(&env.prefix)
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("variables")
                    .source(Some(env.known())),
            );
        }

        for (key, value) in self.overrides {
            builder = builder.set_override(&key, value).map_err(|e| ConfigError::ParseError {
                path: "<override>".to_string(),
                message: format!("{key}: {e}"),
            })?;
        }

        let cfg = builder.build().context("failed to load configuration")?;
        let config: ReportConfig = cfg
            .try_deserialize()
            .context("invalid report configuration")?;
        Ok(config)
    }

    /// Sources that will be read, skipping optional files that do not exist.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<&ConfigSource> {
        self.sources
            .iter()
            .filter(|source| match source {
                ConfigSource::OptionalFile(path) => path.exists(),
                _ => true,
            })
            .collect()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.loaded_files()
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}
