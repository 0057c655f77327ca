// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;
use secrecy::SecretString;

use crate::domain::session::models::{Session, SessionError, UserProfile};
use crate::domain::shared::models::UserId;

pub struct AppConfig {
    /// The maximum distance between the timestamps of a pending message and a pushed message
    /// for the latter to be treated as the server's echo of the former.
    pub echo_match_window: TimeDelta,
    /// The period of inactivity after which the user is signed out.
    pub idle_timeout: TimeDelta,
}

/// Holds the signed-in session. Populated on sign in, cleared on sign out.
pub struct AppContext {
    session: RwLock<Option<Session>>,
    last_activity: RwLock<Option<DateTime<Utc>>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            last_activity: Default::default(),
            config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            echo_match_window: TimeDelta::seconds(10),
            idle_timeout: TimeDelta::minutes(30),
        }
    }
}

impl AppContext {
    pub fn session(&self) -> Result<Session> {
        Ok(self
            .session
            .read()
            .clone()
            .ok_or(SessionError::NotSignedIn)?)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn current_user(&self) -> Result<UserProfile> {
        Ok(self
            .session
            .read()
            .as_ref()
            .map(|session| session.user.clone())
            .ok_or(SessionError::NotSignedIn)?)
    }

    pub fn current_user_id(&self) -> Result<UserId> {
        Ok(self
            .session
            .read()
            .as_ref()
            .map(|session| session.user.id.clone())
            .ok_or(SessionError::NotSignedIn)?)
    }

    pub fn bearer_token(&self) -> Result<SecretString> {
        Ok(self
            .session
            .read()
            .as_ref()
            .map(|session| session.token.clone())
            .ok_or(SessionError::NotSignedIn)?)
    }
}

impl AppContext {
    pub fn set_session(&self, session: Session, now: DateTime<Utc>) {
        self.session.write().replace(session);
        self.last_activity.write().replace(now);
    }

    pub fn reset_session(&self) -> Option<Session> {
        self.last_activity.write().take();
        self.session.write().take()
    }

    pub fn record_activity(&self, now: DateTime<Utc>) {
        if !self.is_signed_in() {
            return;
        }
        self.last_activity.write().replace(now);
    }

    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        *self.last_activity.read()
    }

    /// Returns true if a user is signed in and hasn't been active for longer than the
    /// configured idle timeout.
    pub fn is_idle(&self, now: DateTime<Utc>) -> bool {
        let Some(last_activity) = *self.last_activity.read() else {
            return false;
        };
        self.is_signed_in() && now - last_activity > self.config.idle_timeout
    }
}
