// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::{ConversationId, ProductId, UserId, UserSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub participants: Vec<UserSummary>,
    /// The listing the conversation was started from, if any.
    pub product: Option<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub image: Option<Url>,
    pub price: Option<f64>,
}

/// A conversation together with its (chronologically ordered) messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationHistory {
    pub conversation: Conversation,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn counterpart(&self, user_id: &UserId) -> Option<&UserSummary> {
        self.participants
            .iter()
            .find(|participant| &participant.id != user_id)
    }

    pub fn participant(&self, user_id: &UserId) -> Option<&UserSummary> {
        self.participants
            .iter()
            .find(|participant| &participant.id == user_id)
    }
}
