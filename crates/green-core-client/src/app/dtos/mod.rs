// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::app::deps::AppConfig;
pub use crate::app::services::SendOutcome;
pub use crate::domain::messaging::models::{
    Attachment, Composer, Conversation, ConversationHistory, LoadState, Message, MessageId,
    MessageSeenEvent, MessagesSeenEvent, ProductSummary, SendMessageRequest, TypingEvent,
};
pub use crate::domain::session::models::{Session, SessionError, UserProfile, UserRole};
pub use crate::domain::shared::models::{ConversationId, ProductId, UserId, UserSummary};
