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

pub mod filter;
pub mod histogram;
pub mod log_store;
pub mod workspace;

pub use filter::{filter_lines, FilterData, FilterKey, SeverityFilter};
pub use histogram::HistogramData;
pub use log_store::{Diagnostic, LoadOptions, LoadReport, LogSource, LogStore};
pub use workspace::{DisplayLine, Workspace};
