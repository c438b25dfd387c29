//! Settings repository trait.

use async_trait::async_trait;

use super::model::MenuSettings;
use crate::error::Result;

/// Persistence boundary for plugin settings.
///
/// The host's settings store sits behind this trait; the plugin only asks
/// for the current value or hands back a replacement.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the persisted settings.
    /// Returns the default when nothing has been stored yet.
    async fn load(&self) -> Result<MenuSettings>;

    /// Persists the settings.
    async fn save(&self, settings: &MenuSettings) -> Result<()>;
}
