// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{info, warn};

use green_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynSessionRepository, DynTimeProvider,
};
use crate::domain::session::models::{Session, UserProfile};
use crate::{ClientEvent, SignOutReason};

#[derive(InjectDependencies)]
pub struct SessionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    session_repo: DynSessionRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl SessionService {
    /// Stores `session` and makes it the current one.
    pub async fn sign_in(&self, session: Session) -> Result<()> {
        self.session_repo.set(&session).await?;
        self.activate(session);
        Ok(())
    }

    /// Makes the persisted session (if any) the current one. Returns the user it belongs to.
    pub async fn restore_session(&self) -> Result<Option<UserProfile>> {
        let Some(session) = self.session_repo.get().await? else {
            info!("No persisted session found.");
            return Ok(None);
        };
        let user = session.user.clone();
        self.activate(session);
        Ok(Some(user))
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.perform_sign_out(SignOutReason::UserInitiated).await
    }

    /// Signs the user out if they weren't active for longer than the configured idle timeout.
    /// Returns true if the user was signed out.
    pub async fn sign_out_if_idle(&self) -> Result<bool> {
        if !self.ctx.is_idle(self.time_provider.now()) {
            return Ok(false);
        }
        info!("Signing out idle user…");
        self.perform_sign_out(SignOutReason::Idle).await?;
        Ok(true)
    }

    pub fn record_activity(&self) {
        self.ctx.record_activity(self.time_provider.now())
    }
}

impl SessionService {
    fn activate(&self, session: Session) {
        let user_id = session.user.id.clone();
        self.ctx.set_session(session, self.time_provider.now());
        info!("Signed in as {}.", user_id);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SignedIn { user_id });
    }

    async fn perform_sign_out(&self, reason: SignOutReason) -> Result<()> {
        if self.ctx.reset_session().is_none() {
            return Ok(());
        }

        // The in-memory session is gone at this point, even if we fail to clear the stored one.
        let result = self.session_repo.clear().await;
        if let Err(err) = &result {
            warn!("Failed to clear the persisted session. {}", err.to_string());
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SignedOut { reason });
        result
    }
}
