// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_view::{ConversationView, SendOutcome};
pub use session_service::SessionService;

mod conversation_view;
mod session_service;
