// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::ProductId;

/// A typed reference carried by a message, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Attachment {
    #[serde(rename_all = "camelCase")]
    Product { product_id: ProductId },
    /// An attachment kind this client doesn't know about yet.
    #[serde(other)]
    Unknown,
}

impl Attachment {
    pub fn product(product_id: impl Into<ProductId>) -> Self {
        Self::Product {
            product_id: product_id.into(),
        }
    }
}
