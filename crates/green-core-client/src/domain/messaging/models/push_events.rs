// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{ConversationId, UserId};

/// `seen_by` has read every message addressed to them in the conversation. `seen_at` is the
/// time of reading, not a cutoff for the messages it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesSeenEvent {
    pub conversation_id: ConversationId,
    pub seen_by: UserId,
    pub seen_at: DateTime<Utc>,
}

/// A single message was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSeenEvent {
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
    pub seen_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingEvent {
    pub conversation_id: ConversationId,
    pub user_id: UserId,
    pub is_typing: bool,
}
