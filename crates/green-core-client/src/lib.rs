// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use app::services::{ConversationView, SendOutcome};
pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, ClientBuilderError};
pub use client_event::{ClientEvent, ConversationEventType, SignOutReason};
pub use domain::general::services::{IDProvider, TimeProvider};
pub use domain::messaging::services::{
    ChatTransport, MessageHandler, MessageIdProvider, MessageSeenHandler, MessagesSeenHandler,
    MessagingService, Subscription, TypingHandler, WrappingMessageIdProvider,
};
pub use domain::session::repos::SessionRepository;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

pub mod infra;
