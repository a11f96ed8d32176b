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

use super::severity::classify;
use super::timestamp::{extract_timestamp, SENTINEL};
use crate::error::TimestampParseError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity category of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
    /// Generic line without a recognised level keyword
    View,
}

impl Severity {
    /// All categories, in the order the filter toggles are presented.
    pub const ALL: [Self; 4] = [Self::View, Self::Error, Self::Warning, Self::Info];

    /// Categories that take part in the timeline.
    pub const ALERTING: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    #[must_use]
    pub const fn is_alerting(self) -> bool {
        match self {
            Self::Error | Self::Warning | Self::Info => true,
            Self::View => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::View => "View",
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::Error => 0b0001,
            Self::Warning => 0b0010,
            Self::Info => 0b0100,
            Self::View => 0b1000,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" | "e" => Ok(Self::Error),
            "warning" | "warn" | "w" => Ok(Self::Warning),
            "info" | "i" => Ok(Self::Info),
            "view" | "v" => Ok(Self::View),
            other => Err(format!(
                "unknown severity '{other}' (expected error, warning, info or view)"
            )),
        }
    }
}

/// One raw line of an ingested log file.
///
/// The timestamp and severity are derived from `raw` when the line is built
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    raw: String,
    timestamp: NaiveDateTime,
    severity: Severity,
    source_index: usize,
    line_number: usize,
}

impl LogLine {
    /// Build a line, returning the timestamp failure (if any) next to it.
    ///
    /// A failed timestamp still produces a line; it just sorts as the
    /// earliest possible instant.
    #[must_use]
    pub fn parse(
        raw: String,
        source_index: usize,
        line_number: usize,
    ) -> (Self, Option<TimestampParseError>) {
        let (timestamp, error) = match extract_timestamp(&raw) {
            Ok(Some(ts)) => (ts, None),
            Ok(None) => {
                tracing::trace!("no timestamp on line {line_number} of source {source_index}");
                (SENTINEL, None)
            }
            Err(e) => (SENTINEL, Some(e)),
        };
        let severity = classify(&raw);
        let line = Self {
            raw,
            timestamp,
            severity,
            source_index,
            line_number,
        };
        (line, error)
    }

    /// Build a line, discarding any timestamp diagnostic.
    #[must_use]
    pub fn new(raw: String, line_number: usize) -> Self {
        Self::parse(raw, 0, line_number).0
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed timestamp, or [`SENTINEL`] when the line had none.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    #[must_use]
    pub fn has_timestamp(&self) -> bool {
        // SENTINEL lies before year 1, so no parsed value can equal it
        self.timestamp != SENTINEL
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Position of the originating source in the load request.
    #[must_use]
    pub const fn source_index(&self) -> usize {
        self.source_index
    }

    /// 1-based line number within the originating source.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }
}
