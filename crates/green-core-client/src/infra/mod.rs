// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod api;
pub mod events;
pub mod general;
pub mod session;
pub mod transport;
