// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable reporter.
//!
//! # Flow
//!
//! ```text
//! report(source, sink, options)
//!   source.snapshot()            -> EnvSnapshot
//!   plan(&snapshot, &options)    -> Vec<LogRecord>
//!   sink.emit(record) for each
//! ```
//!
//! # Policy
//!
//! ```text
//! variables empty    -> Dump record per snapshot entry (warnings ignored)
//! variables given, per name:
//!   present, value != ""   -> Variable record at `level`
//!   present, value == ""   -> Empty warning    if warnings.empty
//!   absent                 -> Missing warning  if warnings.missing
//!   otherwise              -> nothing
//! ```

pub mod record;
pub mod sink;


use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::env::{EnvSnapshot, EnvSource, ProcessEnv};
use crate::logging::LogLevel;

pub use record::{LogRecord, RecordKind};
pub use sink::{LogSink, MemorySink, TracingSink};

/// Whether empty or missing selected variables produce a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarningPolicy {
    /// Warn when a selected variable is set to an empty string.
    pub empty: bool,
    /// Warn when a selected variable is not set.
    pub missing: bool,
}

impl WarningPolicy {
    #[must_use]
    pub const fn new(empty: bool, missing: bool) -> Self {
        Self { empty, missing }
    }
}

/// Options for a single report.
///
/// # Example
///
/// ```
/// use envreport::logging::LogLevel;
/// use envreport::report::{ReportOptions, WarningPolicy};
///
/// let options = ReportOptions::builder()
///     .with_level(LogLevel::DEBUG)
///     .with_variables(vec!["PATH".to_string(), "HOME".to_string()])
///     .with_warnings(WarningPolicy::new(false, true))
///     .build();
///
/// assert_eq!(options.variables().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ReportOptions {
    /// Level of non-warning records.
    #[builder(setters(name = with_level), default)]
    level: LogLevel,
    /// Names to report, in order. Empty reports everything.
    #[builder(setters(name = with_variables), default)]
    variables: Vec<String>,
    #[builder(setters(name = with_warnings), default)]
    warnings: WarningPolicy,
}

impl ReportOptions {
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[must_use]
    pub const fn warnings(&self) -> WarningPolicy {
        self.warnings
    }
}

/// Decides which records a report emits for `snapshot`.
#[must_use]
pub fn plan(snapshot: &EnvSnapshot, options: &ReportOptions) -> Vec<LogRecord> {
    let level = options.level();

    if options.variables().is_empty() {
        return snapshot
            .iter()
            .map(|(key, value)| LogRecord::dump(level, key, value))
            .collect();
    }

    let warnings = options.warnings();
    options
        .variables()
        .iter()
        .filter_map(|name| match snapshot.get(name) {
            Some(value) if !value.is_empty() => Some(LogRecord::variable(level, name, value)),
            Some(_) => warnings.empty.then(|| LogRecord::empty(name)),
            None => warnings.missing.then(|| LogRecord::missing(name)),
        })
        .collect()
}

/// Reports the variables of `source` to `sink`.
///
/// Never fails. The snapshot is taken once, at the start of the call.
pub fn report<E, S>(source: &E, sink: &S, options: &ReportOptions)
where
    E: EnvSource + ?Sized,
    S: LogSink + ?Sized,
{
    let snapshot = source.snapshot();
    for record in plan(&snapshot, options) {
        sink.emit(&record);
    }
}

/// Reports the current process environment through `tracing`.
pub fn report_process_env(options: &ReportOptions) {
    report(&ProcessEnv, &TracingSink, options);
}
