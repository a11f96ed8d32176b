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

//! Extraction of the bracketed `[DD.MM.YYYY HH:MM:SS.mmm]` timestamp.

use crate::error::TimestampParseError;
use chrono::{Datelike, NaiveDateTime, Timelike};
use fancy_regex::Regex;
use std::sync::LazyLock;

// [05.03.2024 14:23:45.123]
static BRACKETED_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}\.\d{3})\]")
        .expect("valid regex literal")
});

/// `chrono` format of the text inside the brackets.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.3f";

/// Stand-in for lines without a usable timestamp: the earliest instant
/// `chrono` can represent, so such lines sort first.
pub const SENTINEL: NaiveDateTime = NaiveDateTime::MIN;

const VALID_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Find and parse the first bracketed timestamp in `line`.
///
/// Returns `Ok(None)` when the line has no bracketed timestamp at all and an
/// error when the first one found is malformed, out of range or a leap
/// second. Later matches are never tried.
///
/// # Errors
///
/// [`TimestampParseError`] when the bracketed text is not a valid date-time,
/// names a year outside 1..=9999 or a leap second.
#[must_use = "a malformed timestamp is reported through the error"]
pub fn extract_timestamp(line: &str) -> Result<Option<NaiveDateTime>, TimestampParseError> {
    let caps = match BRACKETED_TIMESTAMP.captures(line) {
        Ok(Some(caps)) => caps,
        Ok(None) => return Ok(None),
        Err(e) => {
            tracing::debug!("timestamp regex failed on line: {e}");
            return Ok(None);
        }
    };
    let text = &caps[1];

    let parsed = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        TimestampParseError::Malformed {
            text: text.to_string(),
            source,
        }
    })?;

    if !VALID_YEARS.contains(&parsed.year()) {
        return Err(TimestampParseError::YearOutOfRange {
            text: text.to_string(),
            year: parsed.year(),
        });
    }

    // chrono accepts second 60 as a leap second; seconds stop at 59 here
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimestampParseError::LeapSecond {
            text: text.to_string(),
        });
    }

    Ok(Some(parsed))
}

/// Timestamp of `line`, falling back to [`SENTINEL`].
///
/// Never fails. A malformed timestamp is logged and treated like a missing one.
#[must_use]
pub fn timestamp_or_sentinel(line: &str) -> NaiveDateTime {
    match extract_timestamp(line) {
        Ok(Some(ts)) => ts,
        Ok(None) => SENTINEL,
        Err(e) => {
            tracing::warn!("Error parsing timestamp: {e}");
            SENTINEL
        }
    }
}
