// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsed, read-only view of an environment.
//!
//! ```text
//! "  NAME = value "  -> NAME   => value
//! "NAME="            -> NAME   => ""
//! "garbage"          -> garbage => ""    (raw string, untrimmed)
//! "A=b=c"            -> A      => b=c    (split at first '=')
//! ```

use std::collections::BTreeMap;

/// Name to value mapping captured once per report.
///
/// Keys are unique; a later duplicate entry replaces an earlier one.
/// Iteration is ordered by name, which callers must not rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Builds a snapshot from raw `NAME=value` entries.
    ///
    /// Never fails: an entry without `=` is kept under its raw text with an
    /// empty value.
    #[must_use]
    pub fn from_raw<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = entries
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                match entry.split_once('=') {
                    Some((name, value)) => (name.trim().to_owned(), value.trim().to_owned()),
                    None => (entry.to_owned(), String::new()),
                }
            })
            .collect();
        Self { vars }
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns an iterator over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
