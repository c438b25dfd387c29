//! Host capability contract.

use async_trait::async_trait;
use serde_json::Value;

use super::model::QuickReplySet;
use crate::error::Result;

/// The quick reply capability exposed by the chat application host.
///
/// QRM consumes this contract as an opaque collaborator: set enumeration and
/// lookup are synchronous host calls, execution is asynchronous and resolves
/// to a host-defined value. Implementations are injected at construction
/// time; hosts that do not ship the capability hand out `None` instead.
#[async_trait]
pub trait QuickReplyHost: Send + Sync {
    /// Lists the names of reply sets scoped to the current chat.
    fn list_chat_sets(&self) -> Result<Vec<String>>;

    /// Lists the names of reply sets available across all chats.
    fn list_global_sets(&self) -> Result<Vec<String>>;

    /// Resolves a set by name. Unknown names yield `None`.
    fn get_set_by_name(&self, name: &str) -> Option<QuickReplySet>;

    /// Triggers a reply. The host performs its own lookup and validation;
    /// the returned value is host-defined and only ever logged by QRM.
    async fn execute_quick_reply(&self, set_name: &str, label: &str) -> Result<Value>;
}
