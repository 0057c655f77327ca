// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{
    Message, MessageSeenEvent, MessagesSeenEvent, TypingEvent,
};
use crate::domain::shared::models::ConversationId;

/// An event pushed by the chat backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// A new message was posted to a conversation.
    Message(Message),
    /// All messages of the recipient were read.
    MessagesSeen(MessagesSeenEvent),
    /// A single message was read.
    MessageSeen(MessageSeenEvent),
    /// A participant started or stopped typing.
    Typing(TypingEvent),
}

impl ServerEvent {
    pub fn conversation_id(&self) -> &ConversationId {
        match self {
            ServerEvent::Message(message) => &message.conversation_id,
            ServerEvent::MessagesSeen(event) => &event.conversation_id,
            ServerEvent::MessageSeen(event) => &event.conversation_id,
            ServerEvent::Typing(event) => &event.conversation_id,
        }
    }
}
