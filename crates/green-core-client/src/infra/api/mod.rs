// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use api_config::{ApiConfig, ConfigError, API_BASE_URL_VAR};
pub use api_error::ApiError;
pub use rest_api_client::RestApiClient;

mod api_config;
mod api_error;
pub(crate) mod api_records;
mod rest_api_client;
