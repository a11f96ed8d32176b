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

//! Timeline histogram: per-severity counts over equal-width time buckets.

use crate::error::TimelineError;
use crate::parser::line::{LogLine, Severity};
use chrono::{NaiveDateTime, TimeDelta};

/// Default number of time buckets in the timeline
pub const NUM_BUCKETS: usize = 30;

/// Width given to a timeline whose alerting lines all share one instant
const ZERO_SPAN_MS: i64 = 1000;

/// One time bucket of a severity series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub start: NaiveDateTime,
    pub count: usize,
}

/// Buckets of one alerting severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityBuckets {
    pub severity: Severity,
    pub buckets: Vec<Bucket>,
}

impl SeverityBuckets {
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Computed histogram data
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    /// Earliest and latest timestamp among the alerting lines
    pub time_range: (NaiveDateTime, NaiveDateTime),
    /// Bucket size in seconds
    pub bucket_size: f64,
    /// One entry per alerting severity, in `Severity::ALERTING` order
    pub series: Vec<SeverityBuckets>,
}

impl HistogramData {
    /// Bucket the Error, Warning and Info lines of `lines`.
    ///
    /// View lines are ignored. Lines without a timestamp count at the
    /// sentinel instant, i.e. in the first bucket.
    ///
    /// # Errors
    ///
    /// [`TimelineError::Empty`] for a sequence without alerting lines.
    pub fn compute<'a, I>(lines: I, num_buckets: usize) -> Result<Self, TimelineError>
    where
        I: IntoIterator<Item = &'a LogLine>,
    {
        profiling::scope!("HistogramData::compute");
        let num_buckets = num_buckets.max(1);

        let samples: Vec<(Severity, NaiveDateTime)> = lines
            .into_iter()
            .filter(|line| line.severity().is_alerting())
            .map(|line| (line.severity(), line.timestamp()))
            .collect();

        let time_range = Self::calculate_time_range(&samples).ok_or(TimelineError::Empty)?;
        let (start_time, end_time) = time_range;

        let (origin, span_ms) = Self::bucket_frame(start_time, end_time);
        let starts = Self::bucket_starts(origin, span_ms, num_buckets);

        let mut counts = vec![[0usize; 3]; num_buckets];
        for &(severity, ts) in &samples {
            let idx = Self::timestamp_to_bucket(ts, origin, span_ms, num_buckets);
            counts[idx][Self::series_index(severity)] += 1;
        }

        let series = Severity::ALERTING
            .iter()
            .enumerate()
            .map(|(s_idx, &severity)| SeverityBuckets {
                severity,
                buckets: starts
                    .iter()
                    .zip(&counts)
                    .map(|(&start, row)| Bucket {
                        start,
                        count: row[s_idx],
                    })
                    .collect(),
            })
            .collect();

        tracing::debug!(
            "Timeline over {} alerting lines, {num_buckets} buckets from {start_time} to {end_time}",
            samples.len()
        );

        Ok(Self {
            time_range,
            bucket_size: span_ms as f64 / 1000.0 / num_buckets as f64,
            series,
        })
    }

    /// Buckets of one severity, `None` for [`Severity::View`]
    #[must_use]
    pub fn series(&self, severity: Severity) -> Option<&[Bucket]> {
        self.series
            .iter()
            .find(|s| s.severity == severity)
            .map(|s| s.buckets.as_slice())
    }

    /// Number of lines of `severity` in the histogram
    #[must_use]
    pub fn total(&self, severity: Severity) -> usize {
        self.series(severity)
            .map_or(0, |buckets| buckets.iter().map(|b| b.count).sum())
    }

    /// Largest single bucket count across all severities
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.series
            .iter()
            .flat_map(|s| s.buckets.iter().map(|b| b.count))
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.series.first().map_or(0, |s| s.buckets.len())
    }

    fn calculate_time_range(
        samples: &[(Severity, NaiveDateTime)],
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first_ts = samples.iter().map(|&(_, ts)| ts).min()?;
        let last_ts = samples.iter().map(|&(_, ts)| ts).max()?;
        Some((first_ts, last_ts))
    }

    /// Origin and width in whole milliseconds of the bucketed interval.
    ///
    /// A zero-width range is widened to one second centred on the single
    /// instant, so its samples land in the middle bucket.
    fn bucket_frame(start: NaiveDateTime, end: NaiveDateTime) -> (NaiveDateTime, i128) {
        let span_ms = i128::from((end - start).num_milliseconds());
        if span_ms > 0 {
            return (start, span_ms);
        }
        start
            .checked_sub_signed(TimeDelta::milliseconds(ZERO_SPAN_MS / 2))
            .map_or((start, i128::from(ZERO_SPAN_MS / 2)), |origin| {
                (origin, i128::from(ZERO_SPAN_MS))
            })
    }

    /// Bucket `i` starts at `origin + ceil(span * i / n)` ms, the first
    /// instant that `timestamp_to_bucket` maps to `i`.
    fn bucket_starts(origin: NaiveDateTime, span_ms: i128, num_buckets: usize) -> Vec<NaiveDateTime> {
        let n = num_buckets as i128;
        (0..n)
            .map(|i| {
                let offset = (span_ms * i + n - 1) / n;
                origin
                    .checked_add_signed(TimeDelta::milliseconds(offset as i64))
                    .unwrap_or(origin)
            })
            .collect()
    }

    fn timestamp_to_bucket(
        ts: NaiveDateTime,
        origin: NaiveDateTime,
        span_ms: i128,
        num_buckets: usize,
    ) -> usize {
        let elapsed = i128::from((ts - origin).num_milliseconds());
        let idx = elapsed * num_buckets as i128 / span_ms;
        (idx.max(0) as usize).min(num_buckets - 1)
    }

    const fn series_index(severity: Severity) -> usize {
        match severity {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info | Severity::View => 2,
        }
    }
}
