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

//! Keyword based severity classification.
//!
//! The checks run Warning, then Error, then Info. A line mentioning both
//! "warning" and "error" is a Warning. Existing log triage relies on that
//! order, so keep it.

use super::line::Severity;
use fancy_regex::Regex;
use std::sync::LazyLock;

static WARNING_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWarning\b").expect("valid regex literal"));
static ERROR_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bError\b").expect("valid regex literal"));
static INFO_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bInfo\b").expect("valid regex literal"));

/// Classify a raw line. Lines without any keyword are [`Severity::View`].
#[must_use]
pub fn classify(line: &str) -> Severity {
    let checks: [(&Regex, Severity); 3] = [
        (&*WARNING_KEYWORD, Severity::Warning),
        (&*ERROR_KEYWORD, Severity::Error),
        (&*INFO_KEYWORD, Severity::Info),
    ];

    checks
        .into_iter()
        .find(|(regex, _)| regex.is_match(line).unwrap_or(false))
        .map_or(Severity::View, |(_, severity)| severity)
}
