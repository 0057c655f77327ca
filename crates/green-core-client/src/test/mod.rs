// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use message_builder::MessageBuilder;
pub use mock_app_dependencies::MockAppDependencies;


pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_account as account, mock_account_id as account_id, mock_conversation as conversation,
        mock_conversation_id as conversation_id, mock_counterpart as counterpart,
        mock_counterpart_id as counterpart_id, mock_reference_date as reference_date,
        mock_session as session,
    };
}
