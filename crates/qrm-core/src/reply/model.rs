//! Quick reply domain models.

use serde::{Deserialize, Serialize};

/// A single reply shortcut inside a host-owned set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReply {
    /// Display label. Acts as the identity key during aggregation
    /// (case-sensitive, exact match).
    pub label: String,
    /// Message sent or expanded when the reply is triggered.
    pub message: String,
    /// Hidden replies stay in the host's set but are never aggregated.
    #[serde(default)]
    pub is_hidden: bool,
}

impl QuickReply {
    /// Creates a visible reply.
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            is_hidden: false,
        }
    }

    /// Creates a hidden reply.
    pub fn hidden(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_hidden: true,
            ..Self::new(label, message)
        }
    }
}

/// A named, ordered collection of reply shortcuts.
///
/// Sets are owned by the host and read-only to this plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplySet {
    /// Set name, unique within the host.
    pub name: String,
    /// Replies in host-defined order.
    pub replies: Vec<QuickReply>,
}

impl QuickReplySet {
    /// Creates a new set.
    pub fn new(name: impl Into<String>, replies: Vec<QuickReply>) -> Self {
        Self {
            name: name.into(),
            replies,
        }
    }
}

/// An aggregated, non-hidden entry ready for display and dispatch.
///
/// Transient: rebuilt on every refresh, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyEntry {
    /// Name of the set the entry came from, needed to dispatch it.
    pub set_name: String,
    /// Display label.
    pub label: String,
    /// Message behind the shortcut.
    pub message: String,
}

impl ReplyEntry {
    /// Builds an entry from a reply within the named set.
    pub fn from_reply(set_name: impl Into<String>, reply: &QuickReply) -> Self {
        Self {
            set_name: set_name.into(),
            label: reply.label.clone(),
            message: reply.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_constructor() {
        let reply = QuickReply::hidden("greet", "Hello!");
        assert!(reply.is_hidden);
        assert_eq!(reply.label, "greet");
    }

    #[test]
    fn test_entry_from_reply() {
        let reply = QuickReply::new("greet", "Hello!");
        let entry = ReplyEntry::from_reply("default", &reply);
        assert_eq!(entry.set_name, "default");
        assert_eq!(entry.label, "greet");
        assert_eq!(entry.message, "Hello!");
    }
}
