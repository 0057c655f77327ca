// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Request was not successful: {message}")]
    Unsuccessful { message: String },
    #[error("Response is missing its payload.")]
    MissingPayload,
    #[error("The configured base URL can't be extended with a path.")]
    InvalidBaseUrl,
}
