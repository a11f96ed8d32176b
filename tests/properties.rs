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

//! Property checks for parsing, ordering, filtering and bucketing.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use logsieve::core::{filter_lines, HistogramData, LoadOptions, LogSource, LogStore, SeverityFilter};
use logsieve::parser::timestamp::{extract_timestamp, timestamp_or_sentinel, SENTINEL};
use logsieve::{classify, LogLine, Severity};
use proptest::prelude::*;

fn any_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (1i32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60, 0u32..1000).prop_map(
        |(y, mo, d, h, mi, s, ms)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
                .expect("components are in range")
        },
    )
}

fn bracketed(ts: NaiveDateTime) -> String {
    format!(
        "[{:02}.{:02}.{:04} {:02}:{:02}:{:02}.{:03}]",
        ts.day(),
        ts.month(),
        ts.year(),
        ts.hour(),
        ts.minute(),
        ts.second(),
        ts.nanosecond() / 1_000_000
    )
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn keyword(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Error",
        Severity::Warning => "Warning",
        Severity::Info => "Info",
        Severity::View => "plain",
    }
}

/// A log line with an optional timestamp taken from a small pool, so that
/// equal timestamps are common.
fn any_line() -> impl Strategy<Value = String> {
    (
        prop::option::of(0u32..4),
        any_severity(),
        "[a-z ]{0,12}",
    )
        .prop_map(|(minute, severity, tail)| {
            let prefix = minute.map_or_else(String::new, |m| {
                format!("[01.01.2024 10:0{m}:00.000] ")
            });
            format!("{prefix}{} {tail}", keyword(severity))
        })
}

fn load(files: &[Vec<String>]) -> LogStore {
    let sources: Vec<LogSource> = files
        .iter()
        .enumerate()
        .map(|(idx, lines)| LogSource::Memory {
            name: format!("file{idx}.log"),
            text: lines.join("\n"),
        })
        .collect();
    let mut store = LogStore::new();
    store
        .load(&sources, LoadOptions::default())
        .expect("at least one line");
    store
}

proptest! {
    #[test]
    fn timestamp_round_trips(ts in any_datetime(), before in "[a-zA-Z ]{0,10}", after in "[a-zA-Z ]{0,10}") {
        let line = format!("{before}{}{after}", bracketed(ts));
        prop_assert_eq!(extract_timestamp(&line), Ok(Some(ts)));
    }

    #[test]
    fn lines_without_pattern_get_sentinel(line in "[^\\[]{0,40}") {
        prop_assert_eq!(timestamp_or_sentinel(&line), SENTINEL);
    }

    #[test]
    fn year_zero_gets_sentinel(d in 1u32..=28, mo in 1u32..=12) {
        let line = format!("[{d:02}.{mo:02}.0000 10:00:00.000] Error");
        prop_assert!(extract_timestamp(&line).is_err());
        prop_assert_eq!(timestamp_or_sentinel(&line), SENTINEL);
    }

    #[test]
    fn warning_beats_error(
        warning in "[wW][aA][rR][nN][iI][nN][gG]",
        error in "[eE][rR][rR][oO][rR]",
        warning_first in any::<bool>(),
    ) {
        let line = if warning_first {
            format!("{warning} then {error}")
        } else {
            format!("{error} then {warning}")
        };
        prop_assert_eq!(classify(&line), Severity::Warning);
    }

    #[test]
    fn sort_is_stable(files in prop::collection::vec(prop::collection::vec(any_line(), 1..8), 1..4)) {
        let store = load(&files);
        prop_assert_eq!(store.len(), files.iter().map(Vec::len).sum::<usize>());

        for pair in store.lines().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.timestamp() <= b.timestamp());
            if a.timestamp() == b.timestamp() {
                prop_assert!(
                    (a.source_index(), a.line_number()) < (b.source_index(), b.line_number())
                );
            }
        }
    }

    #[test]
    fn filter_is_a_pure_projection(
        files in prop::collection::vec(prop::collection::vec(any_line(), 1..8), 1..3),
        enabled in prop::collection::vec(any_severity(), 0..4),
    ) {
        let store = load(&files);
        let filter: SeverityFilter = enabled.into_iter().collect();

        let once = filter_lines(store.lines(), &filter);
        let twice = filter_lines(once.iter().copied(), &filter);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|l| filter.is_enabled(l.severity())));

        prop_assert!(filter_lines(store.lines(), &SeverityFilter::none()).is_empty());
        let all = filter_lines(store.lines(), &SeverityFilter::all());
        let original: Vec<&LogLine> = store.lines().iter().collect();
        prop_assert_eq!(all, original);
    }

    #[test]
    fn bucket_counts_add_up(
        lines in prop::collection::vec(any_line(), 1..40),
        buckets in 1usize..64,
    ) {
        let lines: Vec<LogLine> = lines
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| LogLine::new(raw, idx + 1))
            .collect();

        match HistogramData::compute(&lines, buckets) {
            Ok(hist) => {
                prop_assert_eq!(hist.num_buckets(), buckets);
                for severity in Severity::ALERTING {
                    let expected = lines.iter().filter(|l| l.severity() == severity).count();
                    prop_assert_eq!(hist.total(severity), expected);
                }
            }
            Err(_) => {
                prop_assert!(lines.iter().all(|l| !l.severity().is_alerting()));
            }
        }
    }
}
