//! Plugin settings models and repository traits.
//!
//! The enabled/disabled toggle is the only user-facing setting. It is
//! persisted through [`SettingsRepository`] under the plugin's fixed
//! namespace key.

mod model;
mod repository;

pub use model::{MenuSettings, SETTINGS_NAMESPACE};
pub use repository::SettingsRepository;
