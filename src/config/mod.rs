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

use crate::core::filter::SeverityFilter;
use crate::core::histogram::NUM_BUCKETS;
use crate::core::log_store::LoadOptions;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration stored in config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Number of time buckets in the timeline
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,

    /// Severities shown when a session starts
    #[serde(default)]
    pub enabled_severities: SeverityFilter,

    /// Drop whitespace-only lines while loading
    #[serde(default)]
    pub skip_blank_lines: bool,
}

const fn default_bucket_count() -> usize {
    NUM_BUCKETS
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            bucket_count: default_bucket_count(),
            enabled_severities: SeverityFilter::all(),
            skip_blank_lines: false,
        }
    }
}

impl GlobalConfig {
    /// Get the path to the global config file
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("logsieve").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::info!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            tracing::info!("No global config found, using defaults");
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config {}: {e}", path.display());
            Self::default()
        })
    }

    /// Load config from an explicit path
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the file cannot be read or is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading global config from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Loaded config: {} buckets, severities {:?}",
            config.bucket_count,
            Vec::from(config.enabled_severities)
        );
        Ok(config)
    }

    /// Save global config to disk
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when there is no config directory or writing fails.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to an explicit path, creating parent directories
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when a directory or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(io_err)?;

        tracing::info!("Saved global config to {}", path.display());
        Ok(())
    }

    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            skip_blank_lines: self.skip_blank_lines,
        }
    }
}
