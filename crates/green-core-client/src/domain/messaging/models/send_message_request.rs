// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Attachment;

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub content: String,
    pub attachments: Vec<Attachment>,
}
