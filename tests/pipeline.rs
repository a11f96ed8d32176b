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

//! End-to-end pipeline tests against real files on disk.

use logsieve::core::{Diagnostic, LoadOptions, LogSource, LogStore, SeverityFilter, Workspace};
use logsieve::core::histogram::NUM_BUCKETS;
use logsieve::{LoadError, LogLine, Severity, TimelineError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write log file");
    path
}

fn texts(ws: &Workspace) -> Vec<String> {
    ws.display_lines().iter().map(|l| l.text.to_string()).collect()
}

#[test]
fn test_spec_example_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_log(
        &dir,
        "job.log",
        "[01.01.2024 10:00:00.000] Info started\n\
         [01.01.2024 09:00:00.000] Error failed\n\
         no timestamp Warning here\n",
    );

    let mut ws = Workspace::default();
    let report = ws.load(&[LogSource::File(path)]).expect("load");
    assert_eq!(report.total_lines, 3);
    assert!(report.diagnostics.is_empty());

    assert_eq!(
        texts(&ws),
        vec![
            "no timestamp Warning here",
            "[01.01.2024 09:00:00.000] Error failed",
            "[01.01.2024 10:00:00.000] Info started",
        ]
    );

    ws.set_filter(SeverityFilter::only(Severity::Error));
    assert_eq!(texts(&ws), vec!["[01.01.2024 09:00:00.000] Error failed"]);
}

#[test]
fn test_multi_file_merge_with_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = write_log(
        &dir,
        "agent.log",
        "[02.03.2024 08:00:00.000] Info agent up\n\
         [02.03.2024 08:00:02.500] Warning retry\n",
    );
    let second = write_log(
        &dir,
        "service.log",
        "[02.03.2024 08:00:01.000] Info service up\r\n\
         [02.03.2024 08:00:03.000] Error giving up\r\n",
    );
    let missing = dir.path().join("gone.log");

    let mut store = LogStore::new();
    let report = store
        .load_files(&[first, missing, second], LoadOptions::default())
        .expect("load");

    assert_eq!(report.sources_loaded, 2);
    assert_eq!(report.sources_skipped, 1);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::FileRead(e)] if e.source_name.ends_with("gone.log")
    ));

    let order: Vec<&str> = store.lines().iter().map(LogLine::raw).collect();
    assert_eq!(
        order,
        vec![
            "[02.03.2024 08:00:00.000] Info agent up",
            "[02.03.2024 08:00:01.000] Info service up",
            "[02.03.2024 08:00:02.500] Warning retry",
            "[02.03.2024 08:00:03.000] Error giving up",
        ]
    );
    let sources: Vec<usize> = store.lines().iter().map(LogLine::source_index).collect();
    assert_eq!(sources, vec![0, 2, 0, 2]);
}

#[test]
fn test_all_sources_empty_or_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let empty = write_log(&dir, "empty.log", "");
    let missing = dir.path().join("missing.log");

    let mut store = LogStore::new();
    let err = store
        .load_files(&[empty, missing], LoadOptions::default())
        .expect_err("nothing readable");
    let LoadError::EmptyInput {
        attempted,
        diagnostics,
    } = err;
    assert_eq!(attempted, 2);
    assert_eq!(diagnostics.len(), 1);
    assert!(store.is_empty());
    assert_eq!(store.version(), 0);
}

#[test]
fn test_invalid_utf8_is_read_lossily() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("binary.log");
    fs::write(&path, b"[01.01.2024 10:00:00.000] Error \xff\xfe bytes\n").expect("write");

    let mut store = LogStore::new();
    let report = store
        .load_files(&[path], LoadOptions::default())
        .expect("load");
    assert!(matches!(report.diagnostics.as_slice(), [Diagnostic::InvalidUtf8 { .. }]));
    assert_eq!(store.len(), 1);
    assert_eq!(store.lines()[0].severity(), Severity::Error);
    assert!(store.lines()[0].has_timestamp());
}

#[test]
fn test_timeline_over_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut content = String::new();
    for minute in 0..30 {
        content.push_str(&format!("[05.06.2024 12:{minute:02}:00.000] Error tick {minute}\n"));
        content.push_str(&format!("[05.06.2024 12:{minute:02}:30.000] Info tock {minute}\n"));
    }
    content.push_str("[05.06.2024 12:30:00.000] Warning end\n");
    content.push_str("continuation without level\n");
    let path = write_log(&dir, "ticks.log", &content);

    let mut ws = Workspace::default();
    ws.load(&[LogSource::File(path)]).expect("load");
    let hist = ws.timeline().expect("alerting lines present");

    assert_eq!(hist.num_buckets(), NUM_BUCKETS);
    assert_eq!(hist.total(Severity::Error), 30);
    assert_eq!(hist.total(Severity::Info), 30);
    assert_eq!(hist.total(Severity::Warning), 1);

    let errors = hist.series(Severity::Error).expect("error series");
    assert!(errors.iter().all(|b| b.count == 1));
    let warnings = hist.series(Severity::Warning).expect("warning series");
    assert_eq!(warnings[NUM_BUCKETS - 1].count, 1);

    ws.set_filter(SeverityFilter::only(Severity::View));
    assert_eq!(ws.visible_count(), 1);
    assert_eq!(ws.timeline(), Err(TimelineError::Empty));
}
