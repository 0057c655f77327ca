// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use active_conversation::{ActiveConversation, ConversationState, LoadState};
pub use attachment::Attachment;
pub use composer::Composer;
pub use conversation::{Conversation, ConversationHistory, ProductSummary};
pub use message::{Message, MessagePatch};
pub use message_id::MessageId;
pub use message_store::{MessageStore, Replacement};
pub use push_events::{MessageSeenEvent, MessagesSeenEvent, TypingEvent};
pub use send_message_request::SendMessageRequest;
pub use visibility_tracker::VisibilityTracker;

mod active_conversation;
mod attachment;
mod composer;
mod conversation;
mod message;
mod message_id;
mod message_store;
mod push_events;
mod send_message_request;
mod visibility_tracker;
