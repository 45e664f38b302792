// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the application.
pub const APP_NAME: &str = "moncal";

const CALENDAR_FILE: &str = "calendar.json";

/// Configuration for the calendar.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Path to the calendar file.
    #[serde(default)]
    pub calendar_path: Option<PathBuf>,

    /// If true, the audit log of the session is printed when it ends.
    #[serde(default)]
    pub print_audit_log: bool,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.calendar_path {
            Some(path) => {
                self.calendar_path = Some(
                    expand_path(path)
                        .map_err(|e| format!("Failed to expand calendar path: {e}"))?,
                );
            }

            None => match get_data_dir() {
                Ok(dir) => self.calendar_path = Some(dir.join(APP_NAME).join(CALENDAR_FILE)),
                Err(e) => {
                    tracing::warn!("Failed to get data directory: {e}");
                    self.calendar_path = Some(PathBuf::from("data").join(CALENDAR_FILE));
                }
            },
        };

        Ok(())
    }

    /// The calendar file, falling back to `data/calendar.json` before normalization.
    pub fn calendar_path(&self) -> PathBuf {
        self.calendar_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("data").join(CALENDAR_FILE))
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    let data_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_DATA_HOME/", "${XDG_DATA_HOME}/"]
    } else {
        &[r"%APPDATA%\", "%APPDATA%/"]
    };
    for prefix in data_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_data_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user's configuration directory, `$XDG_CONFIG_HOME` on unix.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_local_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or("User-specific data directory not found".into())
}
