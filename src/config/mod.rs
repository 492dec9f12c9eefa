use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{DashboardError, ErrorCode, Result};

pub mod loader;

pub use loader::ConfigLoader;

/// Name of the settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "pulseboard.toml";

/// Get the global pulseboard configuration directory
pub fn get_global_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "pulseboard", "pulseboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            DashboardError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                "Could not determine home directory",
            )
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub chat: ChatSettings,
    pub server: ServerSettings,
    pub log_level: Option<String>,
}

/// Where customer rows come from: a hosted REST table or a local export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
    pub file: Option<PathBuf>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub url: String,
    pub path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: "Layer1".to_string(),
            file: None,
            timeout_secs: 30,
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            path: "/process-web-chat/".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text; absent keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|name| std::env::var(name).ok())
    }

    /// Overlay `PULSEBOARD_*` variables using the given lookup
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PULSEBOARD_DATA_URL") {
            self.data.url = Some(url);
        }

        if let Some(key) = lookup("PULSEBOARD_DATA_KEY") {
            self.data.api_key = Some(key);
        }

        if let Some(table) = lookup("PULSEBOARD_DATA_TABLE") {
            self.data.table = table;
        }

        if let Some(url) = lookup("PULSEBOARD_CHAT_URL") {
            self.chat.url = url;
        }

        if let Some(port) = lookup("PULSEBOARD_SERVER_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                DashboardError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("PULSEBOARD_SERVER_PORT is not a valid port: {port}"),
                )
            })?;
        }

        if let Some(level) = lookup("PULSEBOARD_LOG_LEVEL") {
            self.log_level = Some(level);
        }

        Ok(())
    }

    /// Check that the configured data source is usable
    pub fn validate(&self) -> Result<()> {
        if self.data.file.is_none() && self.data.url.is_none() {
            return Err(DashboardError::config_with_code(
                ErrorCode::CONFIG_MISSING_REQUIRED,
                "No data source configured: set data.url or data.file",
            ));
        }

        // A file export takes precedence and never reads the table settings
        if self.data.file.is_some() {
            return Ok(());
        }

        if self.data.api_key.is_none() {
            return Err(DashboardError::config_with_code(
                ErrorCode::CONFIG_MISSING_REQUIRED,
                "data.api_key is required for the REST table source",
            ));
        }

        if self.data.table.trim().is_empty() {
            return Err(DashboardError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "data.table must not be empty",
            ));
        }

        Ok(())
    }
}
