// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use read_receipts_event_handler::ReadReceiptsEventHandler;
pub use server_event::ServerEvent;
pub use typing_event_handler::TypingEventHandler;

use crate::domain::messaging::models::ActiveConversation;
use crate::domain::shared::models::ConversationId;
use crate::{ClientEvent, ConversationEventType};

mod event_handler_queue;
mod messages_event_handler;
mod read_receipts_event_handler;
mod server_event;
mod typing_event_handler;

/// `ServerEventHandler` is a trait representing a handler for events pushed by the backend.
///
/// Handlers run synchronously in the order the events were delivered. If the handler returns
/// `None`, it means the event has been consumed and no further processing should be done.
/// If it returns `Some(event)`, the event is not consumed and should be passed to the next
/// handler.
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    fn handle_event(
        &self,
        conversation: &ActiveConversation,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);

    fn dispatch_conversation_event(
        &self,
        conversation_id: &ConversationId,
        event: ConversationEventType,
    ) {
        self.dispatch_event(ClientEvent::ConversationChanged {
            conversation_id: conversation_id.clone(),
            r#type: event,
        })
    }
}
