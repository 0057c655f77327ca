// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::app::deps::DynAppContext;
use crate::domain::messaging::models::{ConversationHistory, Message, SendMessageRequest};
use crate::domain::messaging::services::MessagingService;
use crate::domain::shared::models::ConversationId;
use crate::infra::api::api_records::{
    ApiEnvelope, ConversationHistoryRecord, MessageRecord, SendMessageBody,
};
use crate::infra::api::{ApiConfig, ApiError};

/// Talks to the marketplace's REST backend on behalf of the signed-in user.
pub struct RestApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    ctx: DynAppContext,
}

impl RestApiClient {
    pub fn new(config: ApiConfig, ctx: DynAppContext) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::from)?;
        Ok(Self { http, config, ctx })
    }
}

impl RestApiClient {
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let token = self.ctx.bearer_token()?;
        debug!("{} {}", method, url);
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token.expose_secret()))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>> {
        let response = request.send().await.map_err(ApiError::from)?;
        let response = Self::check_status(response).await?;
        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(ApiError::from)?;
        Ok(envelope.into_result()?)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl MessagingService for RestApiClient {
    #[instrument(skip(self))]
    async fn load_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<ConversationHistory> {
        let request = self.request(
            Method::GET,
            &[
                "api",
                "v1",
                "chat",
                "conversations",
                conversation_id.as_ref(),
                "messages",
            ],
        )?;
        let record = self
            .send::<ConversationHistoryRecord>(request)
            .await?
            .ok_or(ApiError::MissingPayload)?;
        Ok(record.into())
    }

    #[instrument(skip(self, request))]
    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        request: SendMessageRequest,
    ) -> Result<Message> {
        let http_request = self
            .request(Method::POST, &["api", "v1", "chat", "messages"])?
            .json(&SendMessageBody::new(conversation_id, request));
        let record = self
            .send::<MessageRecord>(http_request)
            .await?
            .ok_or(ApiError::MissingPayload)?;
        Ok(record.into_message(&[]))
    }

    #[instrument(skip(self))]
    async fn mark_conversation_read(&self, conversation_id: &ConversationId) -> Result<()> {
        let request = self.request(
            Method::PATCH,
            &[
                "api",
                "v1",
                "chat",
                "conversations",
                conversation_id.as_ref(),
                "read",
            ],
        )?;
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }
}
