// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use anyhow::Result;

use crate::domain::messaging::models::{
    Message, MessageId, MessageSeenEvent, MessagesSeenEvent, TypingEvent,
};
use crate::domain::shared::models::ConversationId;

pub type MessageHandler = Box<dyn Fn(Message) + Send + Sync>;
pub type MessagesSeenHandler = Box<dyn Fn(MessagesSeenEvent) + Send + Sync>;
pub type MessageSeenHandler = Box<dyn Fn(MessageSeenEvent) + Send + Sync>;
pub type TypingHandler = Box<dyn Fn(TypingEvent) + Send + Sync>;

/// The push side of the chat backend (usually a socket connection).
///
/// Handlers are called in delivery order. They stay registered for as long as the returned
/// `Subscription` is alive.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatTransport: Send + Sync {
    fn join_conversation(&self, conversation_id: &ConversationId) -> Result<()>;
    fn leave_conversation(&self, conversation_id: &ConversationId) -> Result<()>;

    fn on_message(&self, handler: MessageHandler) -> Subscription;
    fn on_messages_seen(&self, handler: MessagesSeenHandler) -> Subscription;
    fn on_message_seen(&self, handler: MessageSeenHandler) -> Subscription;
    fn on_typing(&self, handler: TypingHandler) -> Subscription;

    fn emit_typing(&self, conversation_id: &ConversationId, is_typing: bool) -> Result<()>;
    fn mark_message_as_seen(&self, message_id: &MessageId) -> Result<()>;
}

/// Unregisters a transport handler when dropped.
#[must_use = "The handler is unregistered as soon as the Subscription is dropped"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel()
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("is_active", &self.cancel.is_some())
            .finish()
    }
}
