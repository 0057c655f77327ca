// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use anyhow::Result;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::messaging::models::{
    Message, MessageId, MessageSeenEvent, MessagesSeenEvent, TypingEvent,
};
use crate::domain::messaging::services::{
    ChatTransport, MessageHandler, MessageSeenHandler, MessagesSeenHandler, Subscription,
    TypingHandler,
};
use crate::domain::shared::models::ConversationId;

/// Everything the client sent through a `LocalChatTransport`.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundSignal {
    Joined(ConversationId),
    Left(ConversationId),
    Typing {
        conversation_id: ConversationId,
        is_typing: bool,
    },
    MarkedAsSeen(MessageId),
}

type Handlers<T> = BTreeMap<u64, Arc<dyn Fn(T) + Send + Sync>>;

#[derive(Default)]
struct Registry {
    messages: Handlers<Message>,
    messages_seen: Handlers<MessagesSeenEvent>,
    message_seen: Handlers<MessageSeenEvent>,
    typing: Handlers<TypingEvent>,
}

/// An in-process `ChatTransport`. Pushed events are delivered synchronously to all registered
/// handlers, outbound signals are recorded.
///
/// Used by the demos and tests, or wherever the socket connection is driven by the host
/// application itself.
#[derive(Default)]
pub struct LocalChatTransport {
    registry: Arc<Mutex<Registry>>,
    next_handler_id: AtomicU64,
    outbound: Mutex<Vec<OutboundSignal>>,
}

impl LocalChatTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliver_message(&self, message: Message) {
        let handlers = Self::snapshot(&self.registry.lock().messages);
        for handler in handlers {
            handler(message.clone())
        }
    }

    pub fn deliver_messages_seen(&self, event: MessagesSeenEvent) {
        let handlers = Self::snapshot(&self.registry.lock().messages_seen);
        for handler in handlers {
            handler(event.clone())
        }
    }

    pub fn deliver_message_seen(&self, event: MessageSeenEvent) {
        let handlers = Self::snapshot(&self.registry.lock().message_seen);
        for handler in handlers {
            handler(event.clone())
        }
    }

    pub fn deliver_typing(&self, event: TypingEvent) {
        let handlers = Self::snapshot(&self.registry.lock().typing);
        for handler in handlers {
            handler(event.clone())
        }
    }

    pub fn outbound_signals(&self) -> Vec<OutboundSignal> {
        self.outbound.lock().clone()
    }

    pub fn take_outbound_signals(&self) -> Vec<OutboundSignal> {
        std::mem::take(&mut *self.outbound.lock())
    }

    pub fn handler_count(&self) -> usize {
        let registry = self.registry.lock();
        registry.messages.len()
            + registry.messages_seen.len()
            + registry.message_seen.len()
            + registry.typing.len()
    }
}

impl LocalChatTransport {
    // Handlers are called without holding the lock so that they may drop their subscription.
    fn snapshot<T>(handlers: &Handlers<T>) -> Vec<Arc<dyn Fn(T) + Send + Sync>> {
        handlers.values().cloned().collect()
    }

    fn register<T: 'static>(
        &self,
        handler: Arc<dyn Fn(T) + Send + Sync>,
        handlers: fn(&mut Registry) -> &mut Handlers<T>,
    ) -> Subscription {
        let id = self.next_handler_id.fetch_add(1, Ordering::Relaxed);
        handlers(&mut *self.registry.lock()).insert(id, handler);

        let registry: Weak<Mutex<Registry>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            let Some(registry) = registry.upgrade() else {
                return;
            };
            handlers(&mut *registry.lock()).remove(&id);
        })
    }

    fn record(&self, signal: OutboundSignal) {
        debug!("Sending {:?}", signal);
        self.outbound.lock().push(signal)
    }
}

impl ChatTransport for LocalChatTransport {
    fn join_conversation(&self, conversation_id: &ConversationId) -> Result<()> {
        self.record(OutboundSignal::Joined(conversation_id.clone()));
        Ok(())
    }

    fn leave_conversation(&self, conversation_id: &ConversationId) -> Result<()> {
        self.record(OutboundSignal::Left(conversation_id.clone()));
        Ok(())
    }

    fn on_message(&self, handler: MessageHandler) -> Subscription {
        self.register(Arc::from(handler), |registry| &mut registry.messages)
    }

    fn on_messages_seen(&self, handler: MessagesSeenHandler) -> Subscription {
        self.register(Arc::from(handler), |registry| &mut registry.messages_seen)
    }

    fn on_message_seen(&self, handler: MessageSeenHandler) -> Subscription {
        self.register(Arc::from(handler), |registry| &mut registry.message_seen)
    }

    fn on_typing(&self, handler: TypingHandler) -> Subscription {
        self.register(Arc::from(handler), |registry| &mut registry.typing)
    }

    fn emit_typing(&self, conversation_id: &ConversationId, is_typing: bool) -> Result<()> {
        self.record(OutboundSignal::Typing {
            conversation_id: conversation_id.clone(),
            is_typing,
        });
        Ok(())
    }

    fn mark_message_as_seen(&self, message_id: &MessageId) -> Result<()> {
        self.record(OutboundSignal::MarkedAsSeen(message_id.clone()));
        Ok(())
    }
}
