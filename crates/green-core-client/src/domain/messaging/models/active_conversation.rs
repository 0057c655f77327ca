// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::messaging::models::{
    Composer, Conversation, MessageId, MessageStore, VisibilityTracker,
};
use crate::domain::shared::models::ConversationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// The client-side state of the open conversation.
#[derive(Debug, Default)]
pub struct ConversationState {
    pub conversation: Option<Conversation>,
    pub load_state: LoadState,
    pub messages: MessageStore,
    pub composer: Composer,
    pub visibility: VisibilityTracker,
    pub counterpart_is_typing: bool,
    /// Provisional IDs that were replaced by a pushed echo before the server answered
    /// the send request, mapped to the final ID.
    pub confirmed_provisionals: HashMap<MessageId, MessageId>,
}

/// A conversation that is open in a view. The view and the event handlers share it.
/// The lock must never be held across an `.await`.
#[derive(Debug)]
pub struct ActiveConversation {
    pub id: ConversationId,
    pub state: Mutex<ConversationState>,
}

impl ActiveConversation {
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            state: Default::default(),
        }
    }
}
