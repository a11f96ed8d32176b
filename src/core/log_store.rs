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

//! Ingestion and chronological storage of log lines.

use crate::error::{FileReadError, LoadError, TimestampParseError};
use crate::parser::line::LogLine;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

/// Where a batch of log lines comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// A log file on disk
    File(PathBuf),
    /// Standard input, read to the end
    Stdin,
    /// Text already in memory
    Memory { name: String, text: String },
}

impl LogSource {
    /// Display name used in diagnostics (usually the path)
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Memory { name, .. } => name.clone(),
        }
    }

    /// Read the full content, converting invalid UTF-8 lossily.
    ///
    /// The flag is set when replacement characters had to be inserted.
    fn read_to_string(&self) -> std::io::Result<(String, bool)> {
        let buffer = match self {
            Self::File(path) => std::fs::read(path)?,
            Self::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buffer)?;
                buffer
            }
            Self::Memory { text, .. } => return Ok((text.clone(), false)),
        };
        Ok(match String::from_utf8(buffer) {
            Ok(text) => (text, false),
            Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
        })
    }
}

impl From<PathBuf> for LogSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&std::path::Path> for LogSource {
    fn from(path: &std::path::Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

/// Knobs for a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop lines that contain only whitespace
    pub skip_blank_lines: bool,
}

/// A recovered problem met while loading. The load carries on.
#[derive(Debug)]
pub enum Diagnostic {
    /// A whole source was skipped
    FileRead(FileReadError),
    /// A source was not valid UTF-8; bad bytes became U+FFFD
    InvalidUtf8 { source_name: String },
    /// A line kept its place but got the sentinel timestamp
    Timestamp {
        source_name: String,
        line_number: usize,
        error: TimestampParseError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileRead(e) => write!(f, "{e}"),
            Self::InvalidUtf8 { source_name } => {
                write!(f, "{source_name}: invalid UTF-8 replaced")
            }
            Self::Timestamp {
                source_name,
                line_number,
                error,
            } => write!(f, "{source_name}:{line_number}: {error}"),
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Lines installed in the store
    pub total_lines: usize,
    /// Sources read successfully
    pub sources_loaded: usize,
    /// Sources skipped because they could not be read
    pub sources_skipped: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// Number of lines whose timestamp could not be parsed
    #[must_use]
    pub fn timestamp_errors(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::Timestamp { .. }))
            .count()
    }
}

/// Split at `\n`, `\r\n` or a lone `\r`. A trailing terminator adds no
/// empty line.
fn universal_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Lines gathered from all sources before sorting.
#[derive(Default)]
struct Accumulator {
    lines: Vec<LogLine>,
    report: LoadReport,
}

impl Accumulator {
    fn read_source(mut self, source_index: usize, source: &LogSource, options: LoadOptions) -> Self {
        profiling::scope!("LogStore::read_source");
        let name = source.name();

        let content = match source.read_to_string() {
            Ok((content, false)) => content,
            Ok((content, true)) => {
                tracing::warn!("File {name} is not valid UTF-8, invalid bytes replaced");
                self.report.diagnostics.push(Diagnostic::InvalidUtf8 {
                    source_name: name.clone(),
                });
                content
            }
            Err(e) => {
                tracing::warn!("Error loading file {name}: {e}");
                self.report.sources_skipped += 1;
                self.report.diagnostics.push(Diagnostic::FileRead(FileReadError {
                    source_name: name,
                    source: e,
                }));
                return self;
            }
        };

        let before = self.lines.len();
        for (idx, raw) in universal_lines(&content).enumerate() {
            if options.skip_blank_lines && raw.trim().is_empty() {
                continue;
            }
            let line_number = idx + 1;
            let (line, error) = LogLine::parse(raw.to_string(), source_index, line_number);
            if let Some(error) = error {
                tracing::warn!("Error parsing timestamp at {name}:{line_number}: {error}");
                self.report.diagnostics.push(Diagnostic::Timestamp {
                    source_name: name.clone(),
                    line_number,
                    error,
                });
            }
            self.lines.push(line);
        }

        self.report.sources_loaded += 1;
        tracing::info!(
            "Loaded {} lines from {name} ({} total)",
            self.lines.len() - before,
            self.lines.len()
        );
        self
    }
}

/// The chronologically ordered collection from the most recent load.
///
/// Each successful load replaces the whole collection; nothing is appended
/// across loads. A failed load leaves the store as it was.
#[derive(Debug, Default, Clone)]
pub struct LogStore {
    lines: Vec<LogLine>,
    version: u64,
}

impl LogStore {
    /// Create a new empty `LogStore`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read all `sources` in order, sort the lines by timestamp and install them.
    ///
    /// Unreadable sources are skipped and reported in the returned
    /// [`LoadReport`]. Returns [`LoadError::EmptyInput`] without touching the
    /// current collection when no line at all was read.
    ///
    /// # Errors
    ///
    /// [`LoadError::EmptyInput`] when every source was empty or unreadable.
    pub fn load(
        &mut self,
        sources: &[LogSource],
        options: LoadOptions,
    ) -> Result<LoadReport, LoadError> {
        profiling::scope!("LogStore::load");
        let start_time = std::time::Instant::now();

        let Accumulator { mut lines, mut report } = sources
            .iter()
            .enumerate()
            .fold(Accumulator::default(), |acc, (idx, source)| {
                acc.read_source(idx, source, options)
            });

        if lines.is_empty() {
            tracing::warn!(
                "No log lines loaded from {} source(s), keeping previous collection",
                sources.len()
            );
            return Err(LoadError::EmptyInput {
                attempted: sources.len(),
                diagnostics: report.diagnostics,
            });
        }

        {
            profiling::scope!("sort_by_timestamp");
            // Stable: equal timestamps keep source then line order
            lines.sort_by_key(LogLine::timestamp);
        }

        report.total_lines = lines.len();
        self.lines = lines;
        self.bump_version();

        tracing::info!(
            "Installed {} lines from {} source(s) in {:?} ({} skipped, {} timestamp errors)",
            report.total_lines,
            report.sources_loaded,
            start_time.elapsed(),
            report.sources_skipped,
            report.timestamp_errors()
        );
        Ok(report)
    }

    /// Convenience wrapper around [`LogStore::load`] for file paths.
    ///
    /// # Errors
    ///
    /// Same as [`LogStore::load`].
    pub fn load_files<P>(&mut self, paths: &[P], options: LoadOptions) -> Result<LoadReport, LoadError>
    where
        P: AsRef<std::path::Path>,
    {
        let sources: Vec<LogSource> = paths.iter().map(|p| p.as_ref().into()).collect();
        self.load(&sources, options)
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Get current version number (bumped whenever a load installs lines)
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// All lines in chronological order
    #[must_use]
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LogLine> {
        self.lines.get(index)
    }

    /// Indices of lines matching a predicate, in chronological order
    #[must_use]
    pub fn get_matching_ids<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&LogLine) -> bool,
    {
        profiling::scope!("LogStore::get_matching_ids");
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| predicate(line).then_some(idx))
            .collect()
    }
}
