// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use secrecy::{ExposeSecret, SecretString};

use crate::domain::session::models::UserProfile;

/// The signed-in user together with the bearer token that authorizes their requests.
#[derive(Clone)]
pub struct Session {
    pub token: SecretString,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: SecretString::new(token.into()),
            user,
        }
    }

    pub fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.token.expose_secret() == other.token.expose_secret() && self.user == other.user
    }
}
