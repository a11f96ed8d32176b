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

//! Text rendering of the timeline histogram.

use crate::core::histogram::HistogramData;
use crate::parser::line::Severity;
use crate::ui::palette::chart_color;
use crossterm::style::Stylize;
use std::io::{self, Write};

pub const TITLE: &str = "Log Events Over Time";
pub const X_LABEL: &str = "Time";
pub const Y_LABEL: &str = "Frequency";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const LABEL_WIDTH: usize = 23;
const BAR: &str = "█";

/// Default width of the longest bar, in characters
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Write the histogram as one row per bucket with a bar per severity.
///
/// Bars are scaled so the largest bucket is `bar_width` characters wide.
/// Severities without any line are left out of the legend, like empty
/// series are left out of a chart.
///
/// # Errors
///
/// Any I/O error from `out`.
pub fn write_timeline<W: Write>(
    out: &mut W,
    hist: &HistogramData,
    bar_width: usize,
    color: bool,
) -> io::Result<()> {
    profiling::scope!("write_timeline");
    let bar_width = bar_width.max(1);
    let max_count = hist.max_count().max(1);

    writeln!(out, "{TITLE}")?;

    let legend: Vec<String> = hist
        .series
        .iter()
        .filter(|s| s.total() > 0)
        .map(|s| {
            let label = format!("{BAR} {} ({})", s.severity, s.total());
            paint(label, s.severity, color)
        })
        .collect();
    writeln!(out, "{}", legend.join("  "))?;
    writeln!(out, "{X_LABEL:<LABEL_WIDTH$}  {Y_LABEL}")?;

    let Some(first) = hist.series.first() else {
        return Ok(());
    };

    for (idx, bucket) in first.buckets.iter().enumerate() {
        let label = bucket.start.format(TIME_FORMAT).to_string();
        let mut row = format!("{label:<LABEL_WIDTH$}  ");
        let mut counts = Vec::new();

        for series in &hist.series {
            let count = series.buckets.get(idx).map_or(0, |b| b.count);
            if count == 0 {
                continue;
            }
            let bar = BAR.repeat(bar_len(count, max_count, bar_width));
            row.push_str(&paint(bar, series.severity, color));
            counts.push(count.to_string());
        }

        if !counts.is_empty() {
            row.push(' ');
            row.push_str(&counts.join("/"));
        }
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

/// Non-empty buckets always get at least one character.
const fn bar_len(count: usize, max_count: usize, bar_width: usize) -> usize {
    (count * bar_width).div_ceil(max_count)
}

fn paint(text: String, severity: Severity, color: bool) -> String {
    let Some(rgb) = chart_color(severity).filter(|_| color) else {
        return text;
    };
    text.with(rgb.into()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::line::LogLine;

    fn render(lines: &[&str], buckets: usize, width: usize) -> String {
        let lines: Vec<LogLine> = lines
            .iter()
            .map(|raw| LogLine::new((*raw).to_string(), 1))
            .collect();
        let hist = HistogramData::compute(&lines, buckets).expect("has alerting lines");
        let mut out = Vec::new();
        write_timeline(&mut out, &hist, width, false).expect("write to vec");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_layout() {
        let text = render(
            &[
                "[01.01.2024 10:00:00.000] Error a",
                "[01.01.2024 10:00:00.000] Error b",
                "[01.01.2024 10:02:00.000] Info c",
            ],
            2,
            4,
        );
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], TITLE);
        assert_eq!(rows[1], "█ Error (2)  █ Info (1)");
        assert!(rows[2].starts_with("Time"));
        assert!(rows[2].ends_with("Frequency"));
        assert_eq!(rows[3], "2024-01-01 10:00:00.000  ████ 2");
        assert_eq!(rows[4], "2024-01-01 10:01:00.000  ██ 1");
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_empty_bucket_row_has_no_bar() {
        let text = render(
            &[
                "[01.01.2024 10:00:00.000] Warning a",
                "[01.01.2024 10:03:00.000] Warning b",
            ],
            3,
            10,
        );
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[1], "█ Warning (2)");
        assert_eq!(rows[4], "2024-01-01 10:01:00.000");
    }

    #[test]
    fn test_bar_len() {
        assert_eq!(bar_len(1, 100, 50), 1);
        assert_eq!(bar_len(100, 100, 50), 50);
        assert_eq!(bar_len(3, 4, 4), 3);
    }
}
