//! Presentation view model for the quick reply menu.
//!
//! Display truncation and message previews are rendering concerns. They are
//! applied here, never inside the aggregation, so the underlying collections
//! always carry every aggregated entry.

use serde::{Deserialize, Serialize};

use qrm_core::reply::{ReplyCollections, ReplyEntry};

/// Maximum number of items rendered per panel. Entries beyond the cap stay
/// in the underlying collections.
pub const MAX_VISIBLE_ITEMS: usize = 10;

/// Number of message characters shown in an item tooltip.
pub const TOOLTIP_PREVIEW_CHARS: usize = 50;

/// Placeholder shown when no chat-scoped replies are available.
pub const CHAT_EMPTY_PLACEHOLDER: &str = "No chat quick replies available";

/// Placeholder shown when no global replies are available.
pub const GLOBAL_EMPTY_PLACEHOLDER: &str = "No global quick replies available";

/// One clickable menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Set the entry dispatches into.
    pub set_name: String,
    /// Display label.
    pub label: String,
    /// Truncated message preview for hover text.
    pub tooltip: String,
}

impl MenuItem {
    fn from_entry(entry: &ReplyEntry) -> Self {
        Self {
            set_name: entry.set_name.clone(),
            label: entry.label.clone(),
            tooltip: message_preview(&entry.message),
        }
    }
}

/// One of the two list panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPanel {
    /// Items to render, capped at [`MAX_VISIBLE_ITEMS`].
    pub items: Vec<MenuItem>,
    /// Shown by the host when `items` is empty.
    pub placeholder: String,
}

impl MenuPanel {
    fn build(entries: &[ReplyEntry], placeholder: &str) -> Self {
        Self {
            items: entries
                .iter()
                .take(MAX_VISIBLE_ITEMS)
                .map(MenuItem::from_entry)
                .collect(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// Full projection of the plugin UI state for the host to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    /// The floating button follows the enabled setting.
    pub button_visible: bool,
    /// Whether the popup menu is open.
    pub menu_visible: bool,
    /// Chat-scoped panel.
    pub chat: MenuPanel,
    /// Global panel.
    pub global: MenuPanel,
}

impl MenuView {
    /// Projects the aggregated collections into a renderable view.
    pub fn build(collections: &ReplyCollections, menu_visible: bool, button_visible: bool) -> Self {
        Self {
            button_visible,
            menu_visible,
            chat: MenuPanel::build(&collections.chat, CHAT_EMPTY_PLACEHOLDER),
            global: MenuPanel::build(&collections.global, GLOBAL_EMPTY_PLACEHOLDER),
        }
    }
}

/// First [`TOOLTIP_PREVIEW_CHARS`] characters of a message, with an ellipsis
/// appended when the message is longer.
fn message_preview(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(TOOLTIP_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrm_core::reply::QuickReply;

    fn entries(count: usize) -> Vec<ReplyEntry> {
        (0..count)
            .map(|i| ReplyEntry::from_reply("set", &QuickReply::new(format!("label-{}", i), "msg")))
            .collect()
    }

    #[test]
    fn test_panel_caps_items_at_ten() {
        let collections = ReplyCollections {
            chat: entries(15),
            global: Vec::new(),
        };

        let view = MenuView::build(&collections, true, true);
        assert_eq!(view.chat.items.len(), MAX_VISIBLE_ITEMS);
        assert_eq!(view.chat.items[0].label, "label-0");
        assert_eq!(view.chat.items[9].label, "label-9");
    }

    #[test]
    fn test_empty_panels_carry_placeholders() {
        let view = MenuView::build(&ReplyCollections::default(), false, true);
        assert!(view.chat.items.is_empty());
        assert_eq!(view.chat.placeholder, CHAT_EMPTY_PLACEHOLDER);
        assert_eq!(view.global.placeholder, GLOBAL_EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_preview_keeps_short_messages_intact() {
        assert_eq!(message_preview("short"), "short");
        let exactly_fifty = "x".repeat(TOOLTIP_PREVIEW_CHARS);
        assert_eq!(message_preview(&exactly_fifty), exactly_fifty);
    }

    #[test]
    fn test_preview_truncates_long_messages() {
        let long = "y".repeat(TOOLTIP_PREVIEW_CHARS + 1);
        let preview = message_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), TOOLTIP_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // 60 multibyte characters must not panic or split a code point.
        let long = "é".repeat(60);
        let preview = message_preview(&long);
        assert!(preview.starts_with(&"é".repeat(TOOLTIP_PREVIEW_CHARS)));
        assert!(preview.ends_with("..."));
    }
}
