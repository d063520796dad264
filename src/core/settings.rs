//! Engine settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Without an explicit path, settings live in `settings.json` inside the
//! platform config directory (for example `~/.config/chesskers/settings.json`
//! on Linux), falling back to the current directory when the platform has no
//! config directory.
//!
//! # Error Handling
//!
//! [`EngineSettings::load_or_default`] never fails: a missing file or one that
//! does not parse is logged and replaced by defaults. [`EngineSettings::load`]
//! and [`EngineSettings::save`] report errors to the caller.

use crate::core::error::{SettingsError, SettingsResult};
use crate::core::logging::DEFAULT_LOG_FILTER;
use crate::game::engine::TurnEngine;
use crate::game::error::GameResult;
use crate::game::rules::StartingLayout;
use crate::game::types::Team;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Team that makes the first move
    pub first_team: Team,
    /// Pieces placed by `initialize` and `reset`
    pub layout: StartingLayout,
    /// tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            first_team: Team::Checkers,
            layout: StartingLayout::standard(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineSettings {
    /// Resolve the default settings file path
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chesskers") {
            proj_dirs.config_dir().join(SETTINGS_FILENAME)
        } else {
            PathBuf::from(SETTINGS_FILENAME)
        }
    }

    /// Read and parse settings from `path`
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&contents)?;
        info!("[SETTINGS] Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from `path`, using defaults when that fails
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("[SETTINGS] {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }

    /// Start a game from these settings
    pub fn build_engine(&self) -> GameResult<TurnEngine> {
        TurnEngine::new(self.layout.clone(), self.first_team)
    }
}
