//! Quick reply menu use case.
//!
//! Owns the menu state: visibility, the enabled flag, and the two aggregated
//! reply collections. The host capability and the settings store are
//! injected at construction time; nothing is looked up ambiently.

use std::sync::Arc;

use tokio::sync::Mutex;

use qrm_core::error::{QrmError, Result};
use qrm_core::reply::{QuickReplyHost, ReplyCollections};
use qrm_core::settings::{MenuSettings, SettingsRepository};

use crate::view::MenuView;

/// Mutable menu state, fully owned by the service.
#[derive(Debug, Default)]
struct MenuState {
    visible: bool,
    enabled: bool,
    collections: ReplyCollections,
}

/// Use case service for the quick reply menu.
///
/// The host wires its button click to [`MenuService::toggle_menu`], item
/// clicks to [`MenuService::dispatch`], and the settings panel to
/// [`MenuService::set_enabled`], rendering the returned [`MenuView`] after
/// each transition.
pub struct MenuService {
    host: Option<Arc<dyn QuickReplyHost>>,
    settings_repository: Arc<dyn SettingsRepository>,
    state: Mutex<MenuState>,
}

impl MenuService {
    /// Creates the service and loads the persisted settings.
    ///
    /// `host` is `None` when the chat application does not ship the quick
    /// reply capability; the service then degrades to an empty menu.
    pub async fn new(
        host: Option<Arc<dyn QuickReplyHost>>,
        settings_repository: Arc<dyn SettingsRepository>,
    ) -> Result<Self> {
        let settings = settings_repository.load().await?;

        Ok(Self {
            host,
            settings_repository,
            state: Mutex::new(MenuState {
                visible: false,
                enabled: settings.enabled,
                collections: ReplyCollections::default(),
            }),
        })
    }

    /// Rebuilds the reply collections from the host.
    ///
    /// Aggregation failures are logged and leave the menu with empty
    /// collections; there is no user-facing error surface beyond the panel
    /// placeholders.
    pub async fn refresh(&self) {
        let collections = match self.collect_from_host() {
            Ok(collections) => collections,
            Err(e) => {
                tracing::error!("Failed to fetch quick replies: {}", e);
                ReplyCollections::default()
            }
        };

        let mut state = self.state.lock().await;
        state.collections = collections;
    }

    fn collect_from_host(&self) -> Result<ReplyCollections> {
        let host = self.host.as_deref().ok_or(QrmError::HostUnavailable)?;
        ReplyCollections::collect(host)
    }

    /// Toggles the menu. Opening refreshes the collections first, so the
    /// menu always shows current host data. A no-op while disabled.
    pub async fn toggle_menu(&self) -> MenuView {
        let (enabled, visible) = {
            let state = self.state.lock().await;
            (state.enabled, state.visible)
        };

        if enabled {
            if visible {
                self.hide_menu().await;
            } else {
                self.refresh().await;
                self.state.lock().await.visible = true;
            }
        }

        self.menu_view().await
    }

    /// Hides the menu without touching the collections.
    pub async fn hide_menu(&self) {
        self.state.lock().await.visible = false;
    }

    /// Triggers a quick reply through the host and closes the menu.
    ///
    /// Success and failure take the same transition: the outcome is logged
    /// and the menu closes either way. Failures are not retried and not
    /// surfaced to the user.
    pub async fn dispatch(&self, set_name: &str, label: &str) {
        match &self.host {
            Some(host) => match host.execute_quick_reply(set_name, label).await {
                Ok(result) => {
                    tracing::info!("Quick reply '{}.{}' executed: {}", set_name, label, result);
                }
                Err(e) => {
                    tracing::warn!("Quick reply '{}.{}' failed: {}", set_name, label, e);
                }
            },
            None => {
                tracing::error!("Quick reply host capability is not available");
            }
        }

        self.hide_menu().await;
    }

    /// Enables or disables the whole plugin and persists the choice.
    ///
    /// Disabling closes the menu; the floating button follows the enabled
    /// flag through [`MenuView::button_visible`].
    pub async fn set_enabled(&self, enabled: bool) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.enabled = enabled;
            if !enabled {
                state.visible = false;
            }
        }

        self.settings_repository
            .save(&MenuSettings { enabled })
            .await
    }

    /// Whether the plugin is enabled.
    pub async fn is_enabled(&self) -> bool {
        self.state.lock().await.enabled
    }

    /// Whether the popup menu is currently open.
    pub async fn is_menu_visible(&self) -> bool {
        self.state.lock().await.visible
    }

    /// Snapshot of the aggregated collections.
    pub async fn collections(&self) -> ReplyCollections {
        self.state.lock().await.collections.clone()
    }

    /// Projects the current state for the host to render.
    pub async fn menu_view(&self) -> MenuView {
        let state = self.state.lock().await;
        MenuView::build(&state.collections, state.visible, state.enabled)
    }
}
