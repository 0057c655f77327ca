// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{ConversationHistory, Message, SendMessageRequest};
use crate::domain::shared::models::ConversationId;

/// The request/response side of the chat backend.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    /// Loads the conversation with its messages in chronological order.
    async fn load_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<ConversationHistory>;

    /// Sends a message and returns it as stored by the server.
    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        request: SendMessageRequest,
    ) -> Result<Message>;

    async fn mark_conversation_read(&self, conversation_id: &ConversationId) -> Result<()>;
}
