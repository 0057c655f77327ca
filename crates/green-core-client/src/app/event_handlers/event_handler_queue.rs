// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, error};

use crate::app::deps::AppDependencies;
use crate::app::event_handlers::{
    MessagesEventHandler, ReadReceiptsEventHandler, ServerEvent, ServerEventHandler,
    TypingEventHandler,
};
use crate::domain::messaging::models::ActiveConversation;

pub struct ServerEventHandlerQueue {
    handlers: Vec<Box<dyn ServerEventHandler>>,
}

impl ServerEventHandlerQueue {
    pub fn new(handlers: Vec<Box<dyn ServerEventHandler>>) -> Self {
        Self { handlers }
    }

    /// Runs `event` through the handlers until one of them consumes it. Events that belong to
    /// another conversation than `conversation` are dropped.
    pub fn handle_event(&self, conversation: &ActiveConversation, event: ServerEvent) {
        if event.conversation_id() != &conversation.id {
            debug!(
                "Ignoring event for conversation {} in view of {}.",
                event.conversation_id(),
                conversation.id
            );
            return;
        }

        let mut event = event;

        for handler in self.handlers.iter() {
            match handler.handle_event(conversation, event) {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }

        debug!("Unhandled event {:?}", event);
    }
}

impl From<&AppDependencies> for ServerEventHandlerQueue {
    fn from(deps: &AppDependencies) -> Self {
        Self::new(vec![
            Box::new(MessagesEventHandler::from(deps)),
            Box::new(ReadReceiptsEventHandler::from(deps)),
            Box::new(TypingEventHandler::from(deps)),
        ])
    }
}
