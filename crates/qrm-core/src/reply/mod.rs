//! Quick reply domain models, aggregation, and the host capability contract.
//!
//! Quick replies are host-owned shortcut entries grouped into named sets,
//! scoped either to the current chat or globally. The host exposes them
//! through [`QuickReplyHost`]; QRM merges them into [`ReplyCollections`]
//! for display and dispatch.

mod collections;
mod host;
mod model;

pub use collections::ReplyCollections;
pub use host::QuickReplyHost;
pub use model::{QuickReply, QuickReplySet, ReplyEntry};
