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

//! Severity colors for front ends.
//!
//! The pipeline only hands out severities; every renderer picks its colors
//! from here so text and chart stay consistent.

use crate::parser::line::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const DARK_YELLOW: Rgb = Rgb::new(128, 128, 0);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Color of a line in the log view. `None` means the default text color.
#[must_use]
pub const fn text_color(severity: Severity) -> Option<Rgb> {
    match severity {
        Severity::Error => Some(RED),
        Severity::Warning => Some(DARK_YELLOW),
        Severity::Info => Some(BLUE),
        Severity::View => None,
    }
}

/// Color of a severity series in the timeline. View lines are not charted.
#[must_use]
pub const fn chart_color(severity: Severity) -> Option<Rgb> {
    match severity {
        Severity::Error => Some(RED),
        Severity::Warning => Some(ORANGE),
        Severity::Info => Some(BLUE),
        Severity::View => None,
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        Self::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}
