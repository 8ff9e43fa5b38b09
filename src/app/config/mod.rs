// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[timing]` - Delays for the announcement and the post-submit celebration
//! - `[burst]` - Confetti particle count and physics
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_FEEDBACK_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! Invalid or out-of-range values never fail startup: the loader falls back
//! to defaults and clamps delays and burst parameters to their documented
//! ranges.
//!
//! # Examples
//!
//! ```no_run
//! use iced_feedback::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.timing.celebration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

// Re-export all default constants for convenient access
pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::feedback::Delays;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::confetti::BurstSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "ICED_FEEDBACK_CONFIG_DIR";
const APP_DIR_NAME: &str = "iced_feedback";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    pub theme_mode: ThemeMode,
}

/// Delays for the widget's transient surfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// How long the onboarding announcement stays visible, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_ms: Option<u64>,

    /// How long the success banner and burst stay active, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration_ms: Option<u64>,
}

/// Confetti burst parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BurstConfig {
    /// Particles spawned per burst.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles: Option<usize>,

    /// Downward acceleration, px/frame².
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f32>,

    /// Initial upward speed, px/frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<f32>,
}

/// Root configuration loaded from `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub timing: TimingConfig,
    pub burst: BurstConfig,
}

impl Config {
    /// Resolved delays with defaults applied and values clamped.
    #[must_use]
    pub fn delays(&self) -> Delays {
        Delays {
            announcement: Duration::from_millis(clamp_delay(
                self.timing.announcement_ms.unwrap_or(DEFAULT_ANNOUNCEMENT_MS),
            )),
            celebration: Duration::from_millis(clamp_delay(
                self.timing.celebration_ms.unwrap_or(DEFAULT_CELEBRATION_MS),
            )),
        }
    }

    /// Resolved burst parameters with defaults applied and values clamped.
    #[must_use]
    pub fn burst_settings(&self) -> BurstSettings {
        BurstSettings {
            particle_count: self
                .burst
                .particles
                .unwrap_or(DEFAULT_BURST_PARTICLES)
                .min(MAX_BURST_PARTICLES),
            gravity: self
                .burst
                .gravity
                .unwrap_or(DEFAULT_BURST_GRAVITY)
                .clamp(0.0, MAX_BURST_GRAVITY),
            initial_velocity: self
                .burst
                .initial_velocity
                .unwrap_or(DEFAULT_BURST_VELOCITY)
                .clamp(0.0, MAX_BURST_VELOCITY),
        }
    }
}

/// Ensures persisted delays cannot request nonsensical values.
fn clamp_delay(ms: u64) -> u64 {
    ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Resolves the configuration directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the resolved location.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// malformed file yields defaults plus a warning message for the UI.
#[must_use]
pub fn load() -> (Config, Option<&'static str>) {
    match config_file() {
        Some(path) => load_from_path(&path),
        None => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit directory.
#[must_use]
pub fn load_from_dir(dir: &Path) -> (Config, Option<&'static str>) {
    load_from_path(&dir.join(CONFIG_FILE))
}

/// Loads the configuration from an explicit path.
#[must_use]
pub fn load_from_path(path: &Path) -> (Config, Option<&'static str>) {
    if !path.exists() {
        return (Config::default(), None);
    }

    let parsed = fs::read_to_string(path)
        .map_err(Error::from)
        .and_then(|raw| toml::from_str::<Config>(&raw).map_err(Error::from));

    match parsed {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("settings.toml could not be read; using defaults"),
        ),
    }
}

/// Saves the configuration to the resolved location.
pub fn save(config: &Config) -> Result<()> {
    let dir = config_dir()
        .ok_or_else(|| Error::Config("no configuration directory available".into()))?;
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let raw = toml::to_string_pretty(config)?;
    fs::write(path, raw)?;
    Ok(())
}
