// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use local_chat_transport::{LocalChatTransport, OutboundSignal};

mod local_chat_transport;
