// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::debug;

use green_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::messaging::models::{
    ActiveConversation, MessagePatch, MessageSeenEvent, MessagesSeenEvent,
};
use crate::ConversationEventType;

/// Applies read receipts sent by the counterpart to the viewer's messages.
#[derive(InjectDependencies)]
pub struct ReadReceiptsEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
}

impl ServerEventHandler for ReadReceiptsEventHandler {
    fn name(&self) -> &'static str {
        "read_receipts"
    }

    fn handle_event(
        &self,
        conversation: &ActiveConversation,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::MessagesSeen(event) => self.handle_messages_seen(conversation, event)?,
            ServerEvent::MessageSeen(event) => self.handle_message_seen(conversation, event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ReadReceiptsEventHandler {
    fn handle_messages_seen(
        &self,
        conversation: &ActiveConversation,
        event: MessagesSeenEvent,
    ) -> Result<()> {
        let user_id = self.ctx.current_user_id()?;

        // Our own "mark all read" only concerns the counterpart's messages.
        if event.seen_by == user_id {
            return Ok(());
        }

        let message_ids = conversation
            .state
            .lock()
            .messages
            .mark_read_sent_by(&user_id, event.seen_at);

        if message_ids.is_empty() {
            return Ok(());
        }

        self.client_event_dispatcher.dispatch_conversation_event(
            &conversation.id,
            ConversationEventType::MessagesUpdated { message_ids },
        );
        Ok(())
    }

    fn handle_message_seen(&self, conversation: &ActiveConversation, event: MessageSeenEvent) {
        let did_change = conversation
            .state
            .lock()
            .messages
            .patch(&event.message_id, &MessagePatch::read(event.seen_at));

        if !did_change {
            debug!(
                "Read receipt for unknown or already read message {}.",
                event.message_id
            );
            return;
        }

        self.client_event_dispatcher.dispatch_conversation_event(
            &conversation.id,
            ConversationEventType::MessagesUpdated {
                message_ids: vec![event.message_id],
            },
        );
    }
}
