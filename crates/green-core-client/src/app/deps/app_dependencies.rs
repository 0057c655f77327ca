// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::general::services::TimeProvider;
use crate::domain::messaging::services::{ChatTransport, MessageIdProvider, MessagingService};
use crate::domain::session::repos::SessionRepository;

pub type DynAppContext = Arc<AppContext>;
pub type DynChatTransport = Arc<dyn ChatTransport>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynMessageIdProvider = Arc<dyn MessageIdProvider>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynSessionRepository = Arc<dyn SessionRepository>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub chat_transport: DynChatTransport,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub message_id_provider: DynMessageIdProvider,
    pub messaging_service: DynMessagingService,
    pub session_repo: DynSessionRepository,
    pub time_provider: DynTimeProvider,
}
