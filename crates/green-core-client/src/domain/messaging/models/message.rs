// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::{Attachment, MessageId};
use crate::domain::shared::models::{ConversationId, ProductId, UserId, UserSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: UserSummary,
    pub recipient: Option<UserSummary>,
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    /// Set only on the local copy of a message that hasn't been acknowledged by the server yet.
    pub is_optimistic: bool,
}

/// A partial update applied to a stored message. Only the read state can change after
/// a message was created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessagePatch {
    pub is_read: Option<bool>,
    pub read_at: Option<DateTime<Utc>>,
}

impl MessagePatch {
    pub fn read(at: DateTime<Utc>) -> Self {
        Self {
            is_read: Some(true),
            read_at: Some(at),
        }
    }
}

impl Message {
    pub fn is_from(&self, user_id: &UserId) -> bool {
        &self.sender.id == user_id
    }

    /// Returns true if `user_id` is the recipient of the message. Messages without an explicit
    /// recipient are addressed to everyone but their sender.
    pub fn is_addressed_to(&self, user_id: &UserId) -> bool {
        match &self.recipient {
            Some(recipient) => &recipient.id == user_id,
            None => !self.is_from(user_id),
        }
    }

    /// Replaces the sender and recipient with `sender` and `recipient` where the IDs match but
    /// the names are missing.
    pub fn fill_missing_participants(
        &mut self,
        sender: &UserSummary,
        recipient: Option<&UserSummary>,
    ) {
        if self.sender.id == sender.id && self.sender.name.is_empty() {
            self.sender = sender.clone();
        }

        if let (Some(own), Some(recipient)) = (self.recipient.as_mut(), recipient) {
            if own.id == recipient.id && own.name.is_empty() {
                *own = recipient.clone();
            }
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.attachments.iter().find_map(|attachment| match attachment {
            Attachment::Product { product_id } => Some(product_id),
            Attachment::Unknown => None,
        })
    }

    /// Applies `patch` and returns true if the message changed. `is_read` never goes back to
    /// false and the first `read_at` wins.
    pub fn apply_patch(&mut self, patch: &MessagePatch) -> bool {
        if patch.is_read != Some(true) || self.is_read {
            return false;
        }
        self.is_read = true;
        self.read_at = patch.read_at;
        true
    }

    /// Replaces `self` with `other` while carrying over a read state that `other` might not
    /// know about yet.
    pub(crate) fn overwrite_with(&mut self, mut other: Message) {
        if self.is_read {
            other.is_read = true;
            other.read_at = self.read_at.or(other.read_at);
        }
        *self = other;
    }
}
