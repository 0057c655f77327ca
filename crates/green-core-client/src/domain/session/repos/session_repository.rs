// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::session::models::Session;

/// Persists the session between launches of the app.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Session>>;
    async fn set(&self, session: &Session) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
