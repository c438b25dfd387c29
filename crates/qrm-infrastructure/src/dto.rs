//! Settings DTOs.
//!
//! The stored schema is kept separate from the domain model so the file
//! format can evolve without touching qrm-core.
//!
//! ## Version History
//! - **V1**: Initial schema with the enabled flag

use serde::{Deserialize, Serialize};

use qrm_core::settings::MenuSettings;

/// Settings file schema V1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSettingsV1 {
    /// Whether the plugin is active.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl From<&MenuSettings> for MenuSettingsV1 {
    fn from(settings: &MenuSettings) -> Self {
        MenuSettingsV1 {
            enabled: settings.enabled,
        }
    }
}

impl From<MenuSettingsV1> for MenuSettings {
    fn from(dto: MenuSettingsV1) -> Self {
        MenuSettings {
            enabled: dto.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_enabled_defaults_to_true() {
        let dto: MenuSettingsV1 = toml::from_str("").unwrap();
        let settings: MenuSettings = dto.into();
        assert!(settings.enabled);
    }
}
