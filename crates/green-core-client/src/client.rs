// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use tracing::instrument;

use crate::app::deps::AppDependencies;
use crate::app::services::{ConversationView, SessionService};
use crate::client_builder::{ClientBuilder, UndefinedTransport};
use crate::domain::session::models::{Session, UserProfile};
use crate::domain::shared::models::ConversationId;
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedTransport> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub session: SessionService,
    pub(crate) deps: AppDependencies,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    #[instrument(skip(self, session), fields(user_id = %session.user.id))]
    pub async fn sign_in(&self, session: Session) -> Result<()> {
        self.session.sign_in(session).await
    }

    pub async fn restore_session(&self) -> Result<Option<UserProfile>> {
        self.session.restore_session().await
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.session.sign_out().await
    }

    /// Signs the user out if they were inactive for longer than `AppConfig::idle_timeout`.
    /// Meant to be called periodically by the host application.
    pub async fn sign_out_if_idle(&self) -> Result<bool> {
        self.session.sign_out_if_idle().await
    }

    pub fn record_activity(&self) {
        self.session.record_activity()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.deps.ctx.current_user().ok()
    }

    /// Opens the conversation with `conversation_id` and loads its history. The conversation
    /// stays subscribed to pushed events until the returned view is dropped.
    #[instrument(skip(self))]
    pub async fn open_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<ConversationView> {
        ConversationView::open(&self.deps, conversation_id.clone()).await
    }
}
