// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::messaging::models::{
    Attachment, Conversation, ConversationHistory, Message, MessageId, ProductSummary,
    SendMessageRequest,
};
use crate::domain::shared::models::{ConversationId, ProductId, UserId, UserSummary};
use crate::infra::api::ApiError;

/// The envelope every response of the backend is wrapped in.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if !self.success {
            return Err(ApiError::Unsuccessful {
                message: self.message.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }
        Ok(self.data)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A user reference that may or may not have been populated by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserRecord),
    Id(UserId),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    #[serde(rename = "_id")]
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: UserRef,
    #[serde(default)]
    pub recipient: Option<UserRef>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationRecord {
    #[serde(rename = "_id")]
    pub id: ConversationId,
    #[serde(default)]
    pub participants: Vec<UserRecord>,
    #[serde(default)]
    pub product: Option<ProductRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationHistoryRecord {
    pub conversation: ConversationRecord,
    #[serde(default)]
    pub messages: Vec<MessageRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody<'a> {
    pub conversation_id: &'a ConversationId,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

impl<'a> SendMessageBody<'a> {
    pub fn new(conversation_id: &'a ConversationId, request: SendMessageRequest) -> Self {
        Self {
            conversation_id,
            content: request.content,
            attachments: request
                .attachments
                .into_iter()
                .filter(|attachment| attachment != &Attachment::Unknown)
                .collect(),
        }
    }
}

fn parse_url(url: Option<&str>) -> Option<Url> {
    url.filter(|url| !url.is_empty())
        .and_then(|url| Url::parse(url).ok())
}

impl From<UserRecord> for UserSummary {
    fn from(value: UserRecord) -> Self {
        UserSummary {
            avatar: parse_url(value.avatar.as_deref()),
            id: value.id,
            name: value.name,
        }
    }
}

impl UserRef {
    /// Turns the reference into a summary, looking up unpopulated references in `participants`.
    fn resolve(self, participants: &[UserSummary]) -> UserSummary {
        match self {
            UserRef::Populated(record) => record.into(),
            UserRef::Id(id) => participants
                .iter()
                .find(|participant| participant.id == id)
                .cloned()
                .unwrap_or_else(|| {
                    debug!("Could not resolve user {} from the participants.", id);
                    UserSummary::new(id, "")
                }),
        }
    }
}

impl MessageRecord {
    pub fn into_message(self, participants: &[UserSummary]) -> Message {
        Message {
            id: self.id,
            conversation_id: self.conversation_id,
            sender: self.sender.resolve(participants),
            recipient: self
                .recipient
                .map(|recipient| recipient.resolve(participants)),
            content: self.content,
            attachments: self.attachments,
            created_at: self.created_at,
            is_read: self.is_read,
            read_at: self.read_at,
            is_optimistic: false,
        }
    }
}

impl From<ProductRecord> for ProductSummary {
    fn from(value: ProductRecord) -> Self {
        ProductSummary {
            image: parse_url(value.images.first().map(String::as_str)),
            id: value.id,
            name: value.name,
            price: value.price,
        }
    }
}

impl From<ConversationRecord> for Conversation {
    fn from(value: ConversationRecord) -> Self {
        Conversation {
            id: value.id,
            participants: value.participants.into_iter().map(Into::into).collect(),
            product: value.product.map(Into::into),
        }
    }
}

impl From<ConversationHistoryRecord> for ConversationHistory {
    fn from(value: ConversationHistoryRecord) -> Self {
        let conversation = Conversation::from(value.conversation);
        let messages = value
            .messages
            .into_iter()
            .map(|message| message.into_message(&conversation.participants))
            .collect();

        ConversationHistory {
            conversation,
            messages,
        }
    }
}
