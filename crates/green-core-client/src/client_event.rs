// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{ConversationId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// A user signed in or a persisted session was restored.
    SignedIn { user_id: UserId },

    /// The session was cleared.
    SignedOut { reason: SignOutReason },

    ConversationChanged {
        conversation_id: ConversationId,
        r#type: ConversationEventType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutReason {
    UserInitiated,
    /// The user wasn't active for longer than the idle timeout.
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEventType {
    /// The history of the conversation was loaded.
    MessagesLoaded,

    /// The history of the conversation could not be loaded.
    LoadingFailed,

    /// One or many messages were either received or sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// A pending message was confirmed by the server and now has its final ID.
    MessageReplaced {
        old_id: MessageId,
        new_id: MessageId,
    },

    /// One or many messages changed, e.g. they were read.
    MessagesUpdated { message_ids: Vec<MessageId> },

    /// One or many messages were removed, e.g. because sending them failed.
    MessagesDeleted { message_ids: Vec<MessageId> },

    /// The view should scroll to the newest message.
    ScrollToNewest,

    /// The counterpart started or stopped typing.
    ComposingUsersChanged,

    /// A message could not be sent. Its text was put back into the composer.
    SendFailed { reason: String },
}
