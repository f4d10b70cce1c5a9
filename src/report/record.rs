// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log records produced by a report.

use std::fmt;

use crate::logging::LogLevel;

/// Why a record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Selected variable, present with a value.
    Variable,
    /// Entry of a full dump (no selection).
    Dump,
    /// Selected variable present but empty.
    Empty,
    /// Selected variable absent.
    Missing,
}

impl RecordKind {
    /// Message text carried by records of this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Variable => "Environment Variable",
            Self::Dump => "Environment Variable(s)",
            Self::Empty => "Environment Variable Wasn't Set",
            Self::Missing => "Environment Variable Wasn't Found",
        }
    }

    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Empty | Self::Missing)
    }
}

/// A single structured record handed to a [`LogSink`](super::LogSink).
///
/// Fields are ordered: `key` first, then `value` when present. Warning
/// records never carry a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    kind: RecordKind,
    key: String,
    value: Option<String>,
}

impl LogRecord {
    pub(crate) fn variable(level: LogLevel, key: &str, value: &str) -> Self {
        Self {
            level,
            kind: RecordKind::Variable,
            key: key.to_owned(),
            value: Some(value.to_owned()),
        }
    }

    pub(crate) fn dump(level: LogLevel, key: &str, value: &str) -> Self {
        Self {
            level,
            kind: RecordKind::Dump,
            key: key.to_owned(),
            value: Some(value.to_owned()),
        }
    }

    pub(crate) fn empty(key: &str) -> Self {
        Self::warning(RecordKind::Empty, key)
    }

    pub(crate) fn missing(key: &str) -> Self {
        Self::warning(RecordKind::Missing, key)
    }

    fn warning(kind: RecordKind, key: &str) -> Self {
        Self {
            level: LogLevel::WARN,
            kind,
            key: key.to_owned(),
            value: None,
        }
    }

    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.kind.is_warning()
    }

    /// Ordered key/value fields of this record.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("key", self.key.as_str())];
        if let Some(value) = &self.value {
            fields.push(("value", value.as_str()));
        }
        fields
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.level.to_filter_string().to_ascii_uppercase(),
            self.message()
        )?;
        for (name, value) in self.fields() {
            write!(f, " {name}={value:?}")?;
        }
        Ok(())
    }
}
