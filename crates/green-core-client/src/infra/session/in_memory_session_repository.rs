// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::session::models::Session;
use crate::domain::session::repos::SessionRepository;

#[derive(Default)]
pub struct InMemorySessionRepository {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get(&self) -> Result<Option<Session>> {
        Ok(self.session.read().clone())
    }

    async fn set(&self, session: &Session) -> Result<()> {
        self.session.write().replace(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.session.write().take();
        Ok(())
    }
}
