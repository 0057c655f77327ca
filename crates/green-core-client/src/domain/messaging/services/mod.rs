// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_transport::{
    ChatTransport, MessageHandler, MessageSeenHandler, MessagesSeenHandler, Subscription,
    TypingHandler,
};
pub use message_id_provider::{MessageIdProvider, WrappingMessageIdProvider};
pub use messaging_service::MessagingService;

mod chat_transport;
mod message_id_provider;
mod messaging_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::chat_transport::MockChatTransport;
    pub use super::messaging_service::MockMessagingService;
}
