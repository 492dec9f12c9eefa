use super::{get_global_config_dir, Settings, SETTINGS_FILE};
use crate::error::{DashboardError, ErrorCode, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolves and loads layered settings: defaults, then one TOML file, then
/// environment variables.
pub struct ConfigLoader {
    working_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            global_dir: get_global_config_dir().ok(),
        }
    }

    /// Override the global configuration directory
    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    /// Pick the settings file. An explicit path must exist; otherwise the
    /// working directory file wins over the global one.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DashboardError::config_with_code(
                    ErrorCode::CONFIG_NOT_FOUND,
                    format!("Config file not found: {}", path.display()),
                ));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = self.working_dir.join(SETTINGS_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(self
            .global_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.exists()))
    }

    /// Load settings from file (when one resolves) without environment overrides
    pub async fn load_file(&self, explicit: Option<&Path>) -> Result<Settings> {
        match self.resolve(explicit)? {
            Some(path) => {
                debug!("Loading settings from {}", path.display());
                let content = fs::read_to_string(&path).await.map_err(|e| {
                    DashboardError::config(format!("Cannot read {}", path.display()))
                        .with_source(e)
                })?;
                Settings::from_toml(&content)
                    .map_err(|e| e.with_context(path.display()))
            }
            None => {
                debug!("No settings file found, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Load settings with environment overrides applied
    pub async fn load(&self, explicit: Option<&Path>) -> Result<Settings> {
        let mut settings = self.load_file(explicit).await?;
        settings.merge_env_vars()?;
        Ok(settings)
    }
}
