// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynChatTransport, DynMessageIdProvider,
    DynMessagingService, DynSessionRepository, DynTimeProvider,
};
use crate::app::services::SessionService;
use crate::client::ClientInner;
use crate::domain::general::services::TimeProvider;
use crate::domain::messaging::services::{
    ChatTransport, MessageIdProvider, MessagingService, WrappingMessageIdProvider,
};
use crate::domain::session::repos::SessionRepository;
use crate::infra::api::{ApiConfig, RestApiClient};
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::general::SystemTimeProvider;
use crate::infra::session::InMemorySessionRepository;
use crate::{Client, ClientDelegate};

pub struct UndefinedTransport;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClientBuilderError {
    #[error("Neither an API config nor a messaging service was set.")]
    MissingMessagingService,
}

enum MessagingBackend {
    Undefined,
    Api(ApiConfig),
    Custom(DynMessagingService),
}

pub struct ClientBuilder<T> {
    app_config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    message_id_provider: DynMessageIdProvider,
    messaging_backend: MessagingBackend,
    session_repo: DynSessionRepository,
    time_provider: DynTimeProvider,
    transport: T,
}

impl ClientBuilder<UndefinedTransport> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            delegate: None,
            message_id_provider: Arc::new(WrappingMessageIdProvider::uuid()),
            messaging_backend: MessagingBackend::Undefined,
            session_repo: Arc::new(InMemorySessionRepository::new()),
            time_provider: Arc::new(SystemTimeProvider::default()),
            transport: UndefinedTransport,
        }
    }

    pub fn set_transport<T: ChatTransport + 'static>(
        self,
        transport: T,
    ) -> ClientBuilder<DynChatTransport> {
        self.set_shared_transport(Arc::new(transport))
    }

    /// Like `set_transport` but for a transport the host application keeps a handle to.
    pub fn set_shared_transport(
        self,
        transport: DynChatTransport,
    ) -> ClientBuilder<DynChatTransport> {
        ClientBuilder {
            app_config: self.app_config,
            delegate: self.delegate,
            message_id_provider: self.message_id_provider,
            messaging_backend: self.messaging_backend,
            session_repo: self.session_repo,
            time_provider: self.time_provider,
            transport,
        }
    }
}

impl<T> ClientBuilder<T> {
    /// Talk to the REST backend described by `config`.
    pub fn set_api_config(mut self, config: ApiConfig) -> Self {
        self.messaging_backend = MessagingBackend::Api(config);
        self
    }

    /// Use `service` instead of the REST backend.
    pub fn set_messaging_service<S: MessagingService + 'static>(mut self, service: S) -> Self {
        self.messaging_backend = MessagingBackend::Custom(Arc::new(service));
        self
    }

    pub fn set_session_repository<R: SessionRepository + 'static>(mut self, repo: R) -> Self {
        self.session_repo = Arc::new(repo);
        self
    }

    pub fn set_message_id_provider<P: MessageIdProvider + 'static>(
        mut self,
        id_provider: P,
    ) -> Self {
        self.message_id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<P: TimeProvider + 'static>(mut self, time_provider: P) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynChatTransport> {
    pub fn build(self) -> Result<Client> {
        let ctx = Arc::new(AppContext::new(self.app_config));

        let messaging_service: DynMessagingService = match self.messaging_backend {
            MessagingBackend::Undefined => {
                return Err(ClientBuilderError::MissingMessagingService.into())
            }
            MessagingBackend::Api(config) => Arc::new(RestApiClient::new(config, ctx.clone())?),
            MessagingBackend::Custom(service) => service,
        };

        let dependencies = AppDependencies {
            chat_transport: self.transport,
            client_event_dispatcher: Arc::new(ImmediateClientEventDispatcher::new(self.delegate)),
            ctx,
            message_id_provider: self.message_id_provider,
            messaging_service,
            session_repo: self.session_repo,
            time_provider: self.time_provider,
        };

        let client_inner = Arc::new(ClientInner {
            session: SessionService::from(&dependencies),
            deps: dependencies,
        });

        Ok(Client::from(client_inner))
    }
}
