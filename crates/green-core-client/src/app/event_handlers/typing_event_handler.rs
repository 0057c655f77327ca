// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use green_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::messaging::models::{ActiveConversation, TypingEvent};
use crate::ConversationEventType;

#[derive(InjectDependencies)]
pub struct TypingEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
}

impl ServerEventHandler for TypingEventHandler {
    fn name(&self) -> &'static str {
        "typing"
    }

    fn handle_event(
        &self,
        conversation: &ActiveConversation,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Typing(event) => self.handle_typing(conversation, event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl TypingEventHandler {
    fn handle_typing(&self, conversation: &ActiveConversation, event: TypingEvent) -> Result<()> {
        if event.user_id == self.ctx.current_user_id()? {
            return Ok(());
        }

        {
            let mut state = conversation.state.lock();
            if state.counterpart_is_typing == event.is_typing {
                return Ok(());
            }
            state.counterpart_is_typing = event.is_typing;
        }

        self.client_event_dispatcher.dispatch_conversation_event(
            &conversation.id,
            ConversationEventType::ComposingUsersChanged,
        );
        Ok(())
    }
}
