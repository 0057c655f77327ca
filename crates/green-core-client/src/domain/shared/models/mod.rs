// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_id::ConversationId;
pub use product_id::ProductId;
pub use user_id::UserId;
pub use user_summary::UserSummary;

mod conversation_id;
mod product_id;
mod user_id;
mod user_summary;
