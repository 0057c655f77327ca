// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use green_utils::id_string;

id_string!(
    /// Identifies a conversation between a buyer and a seller.
    ConversationId
);
