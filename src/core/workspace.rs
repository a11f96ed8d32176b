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

//! The owner of the loaded collection, the severity toggles and the
//! filtered projection derived from both.

use crate::core::filter::{FilterData, FilterKey, SeverityFilter};
use crate::core::histogram::{HistogramData, NUM_BUCKETS};
use crate::core::log_store::{LoadOptions, LoadReport, LogSource, LogStore};
use crate::error::{LoadError, TimelineError};
use crate::parser::line::{LogLine, Severity};

/// A line ready for display: its text and the severity that picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLine<'a> {
    pub text: &'a str,
    pub severity: Severity,
}

impl<'a> From<&'a LogLine> for DisplayLine<'a> {
    fn from(line: &'a LogLine) -> Self {
        Self {
            text: line.raw(),
            severity: line.severity(),
        }
    }
}

/// Pipeline state driven by a front end.
///
/// The filtered view is recomputed whenever the store is reloaded or a
/// severity toggle actually changes, and is never edited directly.
#[derive(Debug, Clone)]
pub struct Workspace {
    store: LogStore,
    filter: SeverityFilter,
    load_options: LoadOptions,
    num_buckets: usize,
    filtered: FilterData,
    filtered_for: FilterKey,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(SeverityFilter::all(), LoadOptions::default(), NUM_BUCKETS)
    }
}

impl Workspace {
    #[must_use]
    pub fn new(filter: SeverityFilter, load_options: LoadOptions, num_buckets: usize) -> Self {
        let store = LogStore::new();
        let filtered = FilterData::compute(&store, &filter);
        let filtered_for = FilterKey::new(filter, store.version());
        Self {
            store,
            filter,
            load_options,
            num_buckets,
            filtered,
            filtered_for,
        }
    }

    /// Replace the collection with the content of `sources`.
    ///
    /// # Errors
    ///
    /// On [`LoadError::EmptyInput`] the previous collection and view stay.
    pub fn load(&mut self, sources: &[LogSource]) -> Result<LoadReport, LoadError> {
        let report = self.store.load(sources, self.load_options)?;
        self.refresh();
        Ok(report)
    }

    pub fn set_enabled(&mut self, severity: Severity, enabled: bool) {
        self.filter.set_enabled(severity, enabled);
        self.refresh();
    }

    /// Flip one severity toggle, returning its new state.
    pub fn toggle(&mut self, severity: Severity) -> bool {
        let enabled = self.filter.toggle(severity);
        self.refresh();
        enabled
    }

    pub fn set_filter(&mut self, filter: SeverityFilter) {
        self.filter = filter;
        self.refresh();
    }

    #[must_use]
    pub const fn filter(&self) -> SeverityFilter {
        self.filter
    }

    #[must_use]
    pub const fn store(&self) -> &LogStore {
        &self.store
    }

    #[must_use]
    pub const fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn set_num_buckets(&mut self, num_buckets: usize) {
        self.num_buckets = num_buckets.max(1);
    }

    /// Lines passing the current filter, in chronological order
    pub fn visible_lines(&self) -> impl Iterator<Item = &LogLine> + '_ {
        self.filtered.lines(&self.store)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// The filtered view as `(text, severity)` pairs for a renderer
    #[must_use]
    pub fn display_lines(&self) -> Vec<DisplayLine<'_>> {
        self.visible_lines().map(DisplayLine::from).collect()
    }

    /// Timeline of the filtered view
    ///
    /// # Errors
    ///
    /// [`TimelineError::Empty`] when no Error, Warning or Info line is visible.
    pub fn timeline(&self) -> Result<HistogramData, TimelineError> {
        HistogramData::compute(self.visible_lines(), self.num_buckets)
    }

    fn refresh(&mut self) {
        let key = FilterKey::new(self.filter, self.store.version());
        if key == self.filtered_for {
            return;
        }
        self.filtered = FilterData::compute(&self.store, &self.filter);
        self.filtered_for = key;
    }
}
