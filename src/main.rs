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

use anyhow::Context;
use clap::{Parser, ValueEnum};
use logsieve::config::GlobalConfig;
use logsieve::core::{LogSource, SeverityFilter, Workspace};
use logsieve::error::TimelineError;
use logsieve::ui::{histogram, log_view};
use logsieve::Severity;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

#[cfg(feature = "ram-profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const LONG_VERSION: &str = env!("LOGSIEVE_LONG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "logsieve")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Merge log files by timestamp, filter by severity and chart alerting lines over time", long_about = None)]
struct Args {
    /// Log files to load, in order ("-" reads standard input)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Hide lines of this severity (error, warning, info, view); repeatable
    #[arg(long, value_name = "SEVERITY")]
    hide: Vec<Severity>,

    /// Show only lines of this severity; repeatable
    #[arg(long, value_name = "SEVERITY", conflicts_with = "hide")]
    only: Vec<Severity>,

    /// Print the timeline histogram of the filtered view
    #[arg(long)]
    timeline: bool,

    /// Do not print the log lines themselves
    #[arg(long)]
    no_lines: bool,

    /// Number of timeline buckets
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    buckets: Option<u16>,

    /// Width of the longest timeline bar, in characters
    #[arg(long, value_name = "COLUMNS", default_value_t = histogram::DEFAULT_BAR_WIDTH)]
    bar_width: usize,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Drop whitespace-only lines while loading
    #[arg(long)]
    skip_blank: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store the effective settings as the new defaults
    #[arg(long)]
    save_config: bool,
}

impl Args {
    /// Layer command line overrides on top of the stored configuration.
    fn apply(&self, config: &mut GlobalConfig) {
        if let Some(buckets) = self.buckets {
            config.bucket_count = usize::from(buckets);
        }
        if self.skip_blank {
            config.skip_blank_lines = true;
        }
        if !self.only.is_empty() {
            config.enabled_severities = self.only.iter().copied().collect();
        }
        for severity in &self.hide {
            config.enabled_severities.set_enabled(*severity, false);
        }
    }

    fn sources(&self) -> Vec<LogSource> {
        self.files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    LogSource::Stdin
                } else {
                    LogSource::File(path.clone())
                }
            })
            .collect()
    }

    fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

fn init_tracing() {
    // Diagnostics go to stderr so stdout carries only the log view.
    // Set RUST_LOG to override (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = args.config.as_ref().map_or_else(
        || Ok(GlobalConfig::load()),
        |path| {
            GlobalConfig::load_from(path)
                .with_context(|| format!("Failed to read config {}", path.display()))
        },
    )?;
    args.apply(&mut config);

    if args.save_config {
        let path = args
            .config
            .as_ref()
            .map_or_else(
                || config.save(),
                |path| config.save_to(path).map(|()| path.clone()),
            )
            .context("Failed to save configuration")?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let filter: SeverityFilter = config.enabled_severities;
    let mut workspace = Workspace::new(filter, config.load_options(), config.bucket_count);

    let report = workspace
        .load(&args.sources())
        .context("No logs were loaded. Please check the files and try again.")?;
    tracing::info!(
        "Loaded {} lines, {} visible with {:?}",
        report.total_lines,
        workspace.visible_count(),
        Vec::<Severity>::from(filter)
    );

    let color = args.use_color();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.no_lines {
        log_view::write_lines(&mut out, &workspace.display_lines(), color)?;
    }

    if args.timeline {
        match workspace.timeline() {
            Ok(hist) => {
                if !args.no_lines {
                    writeln!(out)?;
                }
                histogram::write_timeline(&mut out, &hist, args.bar_width, color)?;
            }
            Err(e @ TimelineError::Empty) => eprintln!("{e}"),
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    #[cfg(feature = "ram-profiling")]
    let _profiler = dhat::Profiler::new_heap();

    #[cfg(feature = "cpu-profiling")]
    {
        tracing::info!("CPU profiling enabled with Tracy - run Tracy profiler to connect");
    }

    tracing::info!("LogSieve starting up (version {LONG_VERSION})");

    match run(&args) {
        // Output piped into a pager that quit early
        Err(e)
            if e.downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe) =>
        {
            Ok(())
        }
        other => other,
    }
}
