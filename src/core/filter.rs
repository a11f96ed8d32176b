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

//! Severity filter state and the filtered projection of the store.

use crate::core::LogStore;
use crate::parser::line::{LogLine, Severity};
use serde::{Deserialize, Serialize};

/// Set of severities currently shown. Defaults to all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Severity>", into = "Vec<Severity>")]
pub struct SeverityFilter {
    mask: u8,
}

impl SeverityFilter {
    #[must_use]
    pub const fn all() -> Self {
        Self { mask: 0b1111 }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    #[must_use]
    pub const fn only(severity: Severity) -> Self {
        Self {
            mask: severity.bit(),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, severity: Severity) -> bool {
        self.mask & severity.bit() != 0
    }

    pub const fn set_enabled(&mut self, severity: Severity, enabled: bool) {
        if enabled {
            self.mask |= severity.bit();
        } else {
            self.mask &= !severity.bit();
        }
    }

    /// Flip one severity, returning its new state.
    pub const fn toggle(&mut self, severity: Severity) -> bool {
        let enabled = !self.is_enabled(severity);
        self.set_enabled(severity, enabled);
        enabled
    }

    /// Enabled severities in toggle order
    pub fn enabled(&self) -> impl Iterator<Item = Severity> + '_ {
        Severity::ALL.into_iter().filter(|s| self.is_enabled(*s))
    }

    #[must_use]
    pub fn matches(&self, line: &LogLine) -> bool {
        self.is_enabled(line.severity())
    }
}

impl Default for SeverityFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Severity> for SeverityFilter {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        let mut filter = Self::none();
        for severity in iter {
            filter.set_enabled(severity, true);
        }
        filter
    }
}

impl From<Vec<Severity>> for SeverityFilter {
    fn from(severities: Vec<Severity>) -> Self {
        severities.into_iter().collect()
    }
}

impl From<SeverityFilter> for Vec<Severity> {
    fn from(filter: SeverityFilter) -> Self {
        filter.enabled().collect()
    }
}

/// Project any line sequence onto the enabled severities, keeping order.
#[must_use]
pub fn filter_lines<'a, I>(lines: I, filter: &SeverityFilter) -> Vec<&'a LogLine>
where
    I: IntoIterator<Item = &'a LogLine>,
{
    lines.into_iter().filter(|line| filter.matches(line)).collect()
}

/// The result of a filter computation: indices of matching lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterData {
    pub filtered_indices: Vec<usize>,
}

impl FilterData {
    /// Compute filtered indices against all lines in the store.
    #[must_use]
    pub fn compute(store: &LogStore, filter: &SeverityFilter) -> Self {
        profiling::scope!("FilterData::compute");

        let filtered_indices = store.get_matching_ids(|line| filter.matches(line));
        tracing::debug!(
            "Filtered logs: {} of {}",
            filtered_indices.len(),
            store.len()
        );

        Self { filtered_indices }
    }

    /// Resolve the indices against the store they were computed from.
    pub fn lines<'a>(&'a self, store: &'a LogStore) -> impl Iterator<Item = &'a LogLine> + 'a {
        self.filtered_indices
            .iter()
            .filter_map(move |&idx| store.get(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filtered_indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_indices.is_empty()
    }
}

/// Cache key for filter validity.
///
/// A cached [`FilterData`] is valid while both the filter state and the
/// store version are unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterKey {
    pub filter: SeverityFilter,
    pub store_version: u64,
}

impl FilterKey {
    #[must_use]
    pub const fn new(filter: SeverityFilter, store_version: u64) -> Self {
        Self {
            filter,
            store_version,
        }
    }
}
