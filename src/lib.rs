// LogSieve - GPL-3.0-or-later
// This file is part of LogSieve.
//
// Copyright (C) 2026 The LogSieve Authors
//
// LogSieve is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogSieve is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogSieve.  If not, see <https://www.gnu.org/licenses/>.

//! `LogSieve` - chronological log merger and severity explorer.
//!
//! ```text
//! files ──► LogStore (read, stable sort by timestamp)
//!               │
//!               ▼
//!          FilterData (enabled severities) ──► display lines
//!               │
//!               ▼
//!          HistogramData (Error / Warning / Info buckets)
//! ```
//!
//! [`Workspace`](crate::core::Workspace) ties the pieces together for a front end: it owns the
//! store and the severity toggles and keeps the filtered view in sync.

pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod ui;

pub use crate::core::{
    DisplayLine, FilterData, HistogramData, LoadOptions, LoadReport, LogSource, LogStore,
    SeverityFilter, Workspace,
};
pub use error::{LoadError, TimelineError, TimestampParseError};
pub use parser::{classify, extract_timestamp, LogLine, Severity};
