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

//! Terminal rendering of the filtered log view.

use crate::core::workspace::DisplayLine;
use crate::ui::palette::text_color;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Write one line per entry, colored by severity when `color` is set.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Any I/O error from `out`.
pub fn write_lines<W: Write>(out: &mut W, lines: &[DisplayLine<'_>], color: bool) -> io::Result<usize> {
    profiling::scope!("write_lines");
    for line in lines {
        let Some(rgb) = text_color(line.severity).filter(|_| color) else {
            writeln!(out, "{}", line.text)?;
            continue;
        };
        writeln!(out, "{}", line.text.with(rgb.into()))?;
    }
    tracing::debug!("Displayed {} lines", lines.len());
    Ok(lines.len())
}
