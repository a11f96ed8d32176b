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

//! Error types for the line-processing pipeline.
//!
//! Two kinds live here. Recovered errors ([`TimestampParseError`],
//! [`FileReadError`]) never stop a load; they are wrapped in a
//! [`Diagnostic`](crate::core::log_store::Diagnostic) and handed back next to
//! the result. Surfaced errors ([`LoadError`], [`TimelineError`]) are returned
//! to the caller and meant to be shown to the user.

use crate::core::log_store::Diagnostic;
use std::path::PathBuf;

/// A bracketed timestamp was found but could not be turned into a date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampParseError {
    #[error("malformed timestamp '{text}': {source}")]
    Malformed {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp '{text}' has year {year} outside 1..=9999")]
    YearOutOfRange { text: String, year: i32 },

    #[error("timestamp '{text}' names a leap second")]
    LeapSecond { text: String },
}

impl TimestampParseError {
    /// The bracketed text that failed to parse.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Malformed { text, .. }
            | Self::YearOutOfRange { text, .. }
            | Self::LeapSecond { text } => text,
        }
    }
}

/// A single source could not be opened or read. The load skips it.
#[derive(Debug, thiserror::Error)]
#[error("cannot read {source_name}: {source}")]
pub struct FileReadError {
    pub source_name: String,
    #[source]
    pub source: std::io::Error,
}

/// A load produced nothing to install.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Every selected source was empty or unreadable. The previous collection
    /// is still in place.
    #[error("no log lines were loaded from {attempted} source(s)")]
    EmptyInput {
        attempted: usize,
        diagnostics: Vec<Diagnostic>,
    },
}

/// The timeline was requested for a view without Error, Warning or Info lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    #[error("No logs to display in timeline.")]
    Empty,
}

/// Failure while persisting the user configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),
}
