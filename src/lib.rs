// envreport: Environment Variable Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)         config (TOML, ENVREPORT_*)
//!          |                     |
//!          +----------+----------+
//!                     v
//!   ,-------------------------------------,
//!   |              report                 |
//!   |  plan(snapshot, options) -> records |
//!   '------+-----------------------+------'
//!          |                       |
//!          v                       v
//!        env                     sink
//!   EnvSource, EnvSnapshot   TracingSink, MemorySink
//!
//!   +-------------------------------------+
//!   |  foundation   error, logging        |
//!   +-------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envreport::env::ProcessEnv;
//! use envreport::report::{report, MemorySink, ReportOptions, WarningPolicy};
//!
//! let sink = MemorySink::new();
//! let options = ReportOptions::builder()
//!     .with_variables(vec!["ENVREPORT_SURELY_UNSET".to_string()])
//!     .with_warnings(WarningPolicy::new(false, true))
//!     .build();
//!
//! report(&ProcessEnv, &sink, &options);
//! assert_eq!(sink.records()[0].message(), "Environment Variable Wasn't Found");
//! ```

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod report;
