// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{debug, info};

use green_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::messaging::models::{ActiveConversation, Message};
use crate::ConversationEventType;

/// Merges pushed messages into the open conversation.
#[derive(InjectDependencies)]
pub struct MessagesEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
}

impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    fn handle_event(
        &self,
        conversation: &ActiveConversation,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(message) => {
                self.handle_message(conversation, message);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    fn handle_message(&self, conversation: &ActiveConversation, message: Message) {
        let event = {
            let mut state = conversation.state.lock();

            // Skip known messages…
            if state.messages.contains(&message.id) {
                debug!("Ignoring duplicate message {}.", message.id);
                return;
            }

            // The push can overtake the response to our own send request. In that case we'd
            // find our pending copy of the message and replace it with the confirmed one.
            let provisional_id = state
                .messages
                .find_optimistic_echo(
                    &message.sender.id,
                    &message.content,
                    message.created_at,
                    self.ctx.config.echo_match_window,
                )
                .cloned();

            if let Some(provisional_id) = provisional_id {
                info!(
                    "Received echo {} of pending message {}.",
                    message.id, provisional_id
                );
                let new_id = message.id.clone();
                state.messages.replace(&provisional_id, message);
                state.visibility.forget(&provisional_id);
                state
                    .confirmed_provisionals
                    .insert(provisional_id.clone(), new_id.clone());

                ConversationEventType::MessageReplaced {
                    old_id: provisional_id,
                    new_id,
                }
            } else {
                let message_id = message.id.clone();
                state.messages.append(message);

                ConversationEventType::MessagesAppended {
                    message_ids: vec![message_id],
                }
            }
        };

        self.client_event_dispatcher
            .dispatch_conversation_event(&conversation.id, event);
        self.client_event_dispatcher
            .dispatch_conversation_event(&conversation.id, ConversationEventType::ScrollToNewest);
    }
}
