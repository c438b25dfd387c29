//! Plugin settings models.

use serde::{Deserialize, Serialize};

/// Fixed namespace key under which the plugin persists its settings.
pub const SETTINGS_NAMESPACE: &str = "quick-reply-menu";

/// User-facing plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSettings {
    /// Whether the plugin (floating button and menu) is active.
    pub enabled: bool,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert!(MenuSettings::default().enabled);
    }
}
