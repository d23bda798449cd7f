//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wt_core::{ReminderPolicy, Schedule};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Work blocks, excluded weekdays and holidays.
    pub schedule: Schedule,

    /// Reminder window lengths.
    pub reminders: ReminderPolicy,

    /// Deadline used when a command is not given one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WT_*)
        figment = figment.merge(Env::prefixed("WT_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for wt.
///
/// On Linux: `~/.config/wt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wt"))
}
