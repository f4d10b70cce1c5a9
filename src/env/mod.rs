// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment acquisition.
//!
//! # Architecture
//!
//! ```text
//! EnvSource (raw "NAME=value" strings)
//!   ProcessEnv   std::env::vars_os(), lossy UTF-8
//!   [S] / Vec<S> fixed entries (tests, embedders)
//!        |
//!        v
//! EnvSnapshot (BTreeMap<String, String>, immutable)
//! ```

pub mod snapshot;


pub use snapshot::EnvSnapshot;

/// Something that can list `NAME=value` entries.
pub trait EnvSource {
    /// Returns every entry in raw `NAME=value` form.
    fn raw_entries(&self) -> Vec<String>;

    /// Parses the current entries into a snapshot.
    fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot::from_raw(self.raw_entries())
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn raw_entries(&self) -> Vec<String> {
        std::env::vars_os()
            .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
            .collect()
    }
}

impl<S: AsRef<str>> EnvSource for [S] {
    fn raw_entries(&self) -> Vec<String> {
        self.iter().map(|entry| entry.as_ref().to_owned()).collect()
    }
}

impl<S: AsRef<str>> EnvSource for Vec<S> {
    fn raw_entries(&self) -> Vec<String> {
        self.as_slice().raw_entries()
    }
}
