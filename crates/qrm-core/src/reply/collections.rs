//! Aggregation of host reply sets into the two display collections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::host::QuickReplyHost;
use super::model::ReplyEntry;
use crate::error::Result;

/// The chat-scoped and global-scoped output collections.
///
/// Rebuilt wholesale on every refresh and discarded on the next; there is no
/// incremental update. No label present in `chat` also appears in `global`:
/// chat scope takes precedence and suppresses same-labeled global entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCollections {
    /// Entries from sets scoped to the current chat.
    pub chat: Vec<ReplyEntry>,
    /// Entries from global sets, minus labels already present in `chat`.
    pub global: Vec<ReplyEntry>,
}

impl ReplyCollections {
    /// Aggregates the host's reply sets.
    ///
    /// Chat sets are walked first: every non-hidden entry is appended to
    /// `chat` and its label recorded. Global sets are walked second, keeping
    /// only non-hidden entries whose label the chat pass did not record.
    /// Source ordering (set enumeration order, then in-set order) is
    /// preserved and duplicates within one scope are kept as the host
    /// listed them.
    ///
    /// A failing scope enumeration aborts the whole aggregation; there is
    /// no per-set isolation. Set names that resolve to no set are skipped.
    pub fn collect(host: &dyn QuickReplyHost) -> Result<Self> {
        let mut chat = Vec::new();
        let mut chat_labels: HashSet<String> = HashSet::new();

        for set_name in host.list_chat_sets()? {
            let Some(set) = host.get_set_by_name(&set_name) else {
                continue;
            };
            for reply in set.replies.iter().filter(|r| !r.is_hidden) {
                chat_labels.insert(reply.label.clone());
                chat.push(ReplyEntry::from_reply(&set_name, reply));
            }
        }

        let mut global = Vec::new();
        for set_name in host.list_global_sets()? {
            let Some(set) = host.get_set_by_name(&set_name) else {
                continue;
            };
            for reply in set.replies.iter().filter(|r| !r.is_hidden) {
                if !chat_labels.contains(&reply.label) {
                    global.push(ReplyEntry::from_reply(&set_name, reply));
                }
            }
        }

        Ok(Self { chat, global })
    }

    /// True when both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.chat.is_empty() && self.global.is_empty()
    }
}
