// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::general::services::IDProvider;
use crate::domain::messaging::models::MessageId;
use crate::infra::general::{NanoIDProvider, UUIDProvider};

/// Hands out provisional IDs for messages that haven't been acknowledged by the server.
pub trait MessageIdProvider: Send + Sync {
    fn new_id(&self) -> MessageId;
}

pub struct WrappingMessageIdProvider<T: IDProvider> {
    id_provider: T,
}

impl<T: IDProvider> WrappingMessageIdProvider<T> {
    pub fn new(id_provider: T) -> Self {
        Self { id_provider }
    }
}

impl WrappingMessageIdProvider<NanoIDProvider> {
    pub fn nano_id() -> Self {
        Self {
            id_provider: NanoIDProvider::default(),
        }
    }
}

impl WrappingMessageIdProvider<UUIDProvider> {
    pub fn uuid() -> Self {
        Self {
            id_provider: UUIDProvider::default(),
        }
    }
}

#[cfg(feature = "test")]
impl WrappingMessageIdProvider<crate::test::IncrementingIDProvider> {
    pub fn incrementing(prefix: &str) -> Self {
        Self {
            id_provider: crate::test::IncrementingIDProvider::new(prefix),
        }
    }
}

impl<T: IDProvider> MessageIdProvider for WrappingMessageIdProvider<T> {
    fn new_id(&self) -> MessageId {
        MessageId::provisional(self.id_provider.new_id())
    }
}
