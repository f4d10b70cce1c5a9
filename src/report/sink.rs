// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Destinations for log records.
//!
//! ```text
//! LogSink::emit(&LogRecord)
//!   TracingSink   tracing event, target "envreport", fields key[, value]
//!   MemorySink    Mutex<Vec<LogRecord>>
//!   Fn(&LogRecord) closures
//! ```

use std::sync::{Mutex, PoisonError};

use tracing::Level;

use super::record::LogRecord;

/// Accepts structured records.
pub trait LogSink {
    fn emit(&self, record: &LogRecord);
}

impl<F> LogSink for F
where
    F: Fn(&LogRecord),
{
    fn emit(&self, record: &LogRecord) {
        self(record);
    }
}

/// Forwards records to the current `tracing` subscriber.
///
/// Context (spans, filtering, formatting) belongs to whatever subscriber is
/// active at the call site. Records at [`LogLevel::SILENT`](crate::logging::LogLevel::SILENT)
/// are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

macro_rules! emit_at {
    ($macro:ident, $record:expr) => {
        tracing::$macro!(
            target: "envreport",
            key = $record.key(),
            value = $record.value(),
            "{}",
            $record.message()
        )
    };
}

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        let Some(level) = record.level().to_tracing_level() else {
            return;
        };

        match level {
            Level::ERROR => emit_at!(error, record),
            Level::WARN => emit_at!(warn, record),
            Level::INFO => emit_at!(info, record),
            Level::DEBUG => emit_at!(debug, record),
            _ => emit_at!(trace, record),
        }
    }
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record emitted so far.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains the collected records.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}
