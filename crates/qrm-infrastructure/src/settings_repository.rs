//! File-backed settings repository.
//!
//! Stores the plugin settings as TOML under the plugin's namespace
//! directory: `{config_dir}/quick-reply-menu/settings.toml`.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use qrm_core::error::{QrmError, Result};
use qrm_core::settings::{MenuSettings, SETTINGS_NAMESPACE, SettingsRepository};

use crate::dto::MenuSettingsV1;

/// TOML-file settings repository.
pub struct FileSettingsRepository {
    /// Directory holding the settings file.
    namespace_dir: PathBuf,
}

impl FileSettingsRepository {
    const SETTINGS_FILENAME: &'static str = "settings.toml";

    /// Creates a repository rooted at the platform config directory.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| QrmError::config("Cannot find config directory"))?;

        Ok(Self {
            namespace_dir: config_dir.join(SETTINGS_NAMESPACE),
        })
    }

    /// Creates a repository rooted at a custom base path (for testing).
    pub fn with_base_path(base: PathBuf) -> Self {
        Self {
            namespace_dir: base.join(SETTINGS_NAMESPACE),
        }
    }

    /// Returns the path to the settings file.
    fn settings_path(&self) -> PathBuf {
        self.namespace_dir.join(Self::SETTINGS_FILENAME)
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load(&self) -> Result<MenuSettings> {
        let path = self.settings_path();

        if !path.exists() {
            // Nothing stored yet
            return Ok(MenuSettings::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| QrmError::io(format!("Failed to read settings file: {}", e)))?;

        let dto: MenuSettingsV1 = toml::from_str(&content)?;
        Ok(dto.into())
    }

    async fn save(&self, settings: &MenuSettings) -> Result<()> {
        let path = self.settings_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| QrmError::io(format!("Failed to create settings directory: {}", e)))?;
        }

        let dto = MenuSettingsV1::from(settings);
        let serialized = toml::to_string_pretty(&dto)?;

        fs::write(&path, serialized)
            .await
            .map_err(|e| QrmError::io(format!("Failed to write settings file: {}", e)))?;

        tracing::debug!("Saved quick reply menu settings to {:?}", path);
        Ok(())
    }
}
