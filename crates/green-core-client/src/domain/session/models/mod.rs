// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session::Session;
pub use session_error::SessionError;
pub use user_profile::{UserProfile, UserRole};

mod session;
mod session_error;
mod user_profile;
