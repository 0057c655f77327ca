// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::{AppConfig, AppContext};
pub use app_dependencies::*;

mod app_context;
mod app_dependencies;
