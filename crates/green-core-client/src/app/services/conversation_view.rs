// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Weak};

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynChatTransport, DynClientEventDispatcher,
    DynMessageIdProvider, DynMessagingService, DynTimeProvider,
};
use crate::app::event_handlers::{ServerEvent, ServerEventHandlerQueue};
use crate::domain::messaging::models::{
    ActiveConversation, Attachment, Composer, Conversation, LoadState, Message, MessageId,
    Replacement, SendMessageRequest,
};
use crate::domain::messaging::services::Subscription;
use crate::domain::shared::models::ConversationId;
use crate::ConversationEventType;

/// The result of `ConversationView::send_message`.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The composer was empty.
    Skipped,
    /// The message was accepted by the server.
    Sent(Message),
    /// The message was rolled back and its text restored in the composer.
    Failed { reason: String },
}

/// Drives a single open conversation: loads its history, sends messages optimistically,
/// merges pushed events and emits typing signals and read receipts.
///
/// Dropping the view unregisters all of its transport handlers.
pub struct ConversationView {
    inner: Arc<ConversationViewInner>,
    _subscriptions: Vec<Subscription>,
}

struct ConversationViewInner {
    conversation: ActiveConversation,
    event_handlers: ServerEventHandlerQueue,

    chat_transport: DynChatTransport,
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    message_id_provider: DynMessageIdProvider,
    messaging_service: DynMessagingService,
    time_provider: DynTimeProvider,
}

impl ConversationView {
    /// Opens the conversation with `conversation_id`. Requires a signed-in session.
    ///
    /// A failure to load the history doesn't fail the view. It opens empty with
    /// `LoadState::Failed` instead. Dropping the returned future before it completes abandons
    /// the history request.
    pub async fn open(deps: &AppDependencies, conversation_id: ConversationId) -> Result<Self> {
        deps.ctx.current_user_id()?;

        let inner = Arc::new(ConversationViewInner {
            conversation: ActiveConversation::new(conversation_id),
            event_handlers: ServerEventHandlerQueue::from(deps),
            chat_transport: deps.chat_transport.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            ctx: deps.ctx.clone(),
            message_id_provider: deps.message_id_provider.clone(),
            messaging_service: deps.messaging_service.clone(),
            time_provider: deps.time_provider.clone(),
        });

        // Subscribe before loading so that nothing pushed in the meantime gets lost.
        let subscriptions = inner.subscribe();

        if let Err(err) = inner.chat_transport.join_conversation(inner.id()) {
            warn!("Failed to join conversation {}. {}", inner.id(), err);
        }

        inner.load_history().await;
        inner.mark_conversation_read().await;

        Ok(Self {
            inner,
            _subscriptions: subscriptions,
        })
    }
}

impl ConversationView {
    pub fn id(&self) -> &ConversationId {
        self.inner.id()
    }

    pub fn conversation(&self) -> Option<Conversation> {
        self.inner.conversation.state.lock().conversation.clone()
    }

    pub fn load_state(&self) -> LoadState {
        self.inner.conversation.state.lock().load_state
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner
            .conversation
            .state
            .lock()
            .messages
            .messages()
            .to_vec()
    }

    pub fn composer(&self) -> Composer {
        self.inner.conversation.state.lock().composer.clone()
    }

    pub fn counterpart_is_typing(&self) -> bool {
        self.inner.conversation.state.lock().counterpart_is_typing
    }
}

impl ConversationView {
    /// Updates the composer after a keystroke and tells the counterpart that we're typing.
    pub fn set_composer_text(&self, text: impl Into<String>) {
        self.inner.conversation.state.lock().composer.text = text.into();
        self.inner.record_activity();
        self.inner.emit_typing(true);
    }

    pub fn set_attach_product(&self, attach_product: bool) {
        self.inner.conversation.state.lock().composer.attach_product = attach_product;
    }

    pub fn composer_did_blur(&self) {
        self.inner.emit_typing(false);
    }

    pub async fn send_message(&self) -> Result<SendOutcome> {
        let outcome = self.inner.send_message().await;
        self.inner.emit_typing(false);
        outcome
    }

    /// Records that the message with `id` entered or left the viewport. Sends a read receipt
    /// when a message addressed to the user and not yet read enters the viewport. Returns true
    /// if a receipt was sent.
    pub fn set_message_visibility(&self, id: &MessageId, is_visible: bool) -> bool {
        if is_visible {
            self.inner.record_activity();
        }
        self.inner.set_message_visibility(id, is_visible)
    }

    /// Tells the backend that all messages of the conversation were read.
    pub async fn mark_conversation_read(&self) {
        self.inner.mark_conversation_read().await
    }

    /// Feeds `event` into the view as if it had been pushed by the transport.
    pub fn handle_server_event(&self, event: ServerEvent) {
        self.inner.handle_event(event)
    }
}

impl Drop for ConversationView {
    fn drop(&mut self) {
        if let Err(err) = self.inner.chat_transport.leave_conversation(self.inner.id()) {
            debug!("Failed to leave conversation {}. {}", self.inner.id(), err);
        }
    }
}

impl Debug for ConversationView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.conversation.state.lock();
        f.debug_struct("ConversationView")
            .field("id", self.id())
            .field("load_state", &state.load_state)
            .field("messages", &state.messages.len())
            .finish_non_exhaustive()
    }
}

impl ConversationViewInner {
    fn id(&self) -> &ConversationId {
        &self.conversation.id
    }

    fn subscribe(self: &Arc<Self>) -> Vec<Subscription> {
        let transport = &self.chat_transport;

        vec![
            transport.on_message(self.forward(ServerEvent::Message)),
            transport.on_messages_seen(self.forward(ServerEvent::MessagesSeen)),
            transport.on_message_seen(self.forward(ServerEvent::MessageSeen)),
            transport.on_typing(self.forward(ServerEvent::Typing)),
        ]
    }

    fn forward<T: 'static>(
        self: &Arc<Self>,
        into_event: fn(T) -> ServerEvent,
    ) -> Box<dyn Fn(T) + Send + Sync> {
        let inner: Weak<Self> = Arc::downgrade(self);

        Box::new(move |payload| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            inner.handle_event(into_event(payload))
        })
    }

    fn handle_event(&self, event: ServerEvent) {
        self.event_handlers.handle_event(&self.conversation, event)
    }

    async fn load_history(&self) {
        let result = self.messaging_service.load_conversation(self.id()).await;

        let event = {
            let mut state = self.conversation.state.lock();

            match result {
                Ok(history) => {
                    info!(
                        "Loaded {} messages for conversation {}.",
                        history.messages.len(),
                        self.id()
                    );

                    // Keep what was pushed while the history was loading.
                    let pushed = state.messages.messages().to_vec();
                    state.messages.hydrate(history.messages);
                    for message in pushed {
                        state.messages.append(message);
                    }

                    state.conversation = Some(history.conversation);
                    state.load_state = LoadState::Loaded;
                    ConversationEventType::MessagesLoaded
                }
                Err(err) => {
                    error!(
                        "Failed to load conversation {}. {}",
                        self.id(),
                        err.to_string()
                    );
                    state.load_state = LoadState::Failed;
                    ConversationEventType::LoadingFailed
                }
            }
        };

        self.client_event_dispatcher
            .dispatch_conversation_event(self.id(), event);
    }

    async fn mark_conversation_read(&self) {
        if let Err(err) = self
            .messaging_service
            .mark_conversation_read(self.id())
            .await
        {
            warn!(
                "Failed to mark conversation {} as read. {}",
                self.id(),
                err.to_string()
            );
        }
    }

    async fn send_message(&self) -> Result<SendOutcome> {
        let user = self.ctx.current_user()?;
        let now = self.time_provider.now();
        self.ctx.record_activity(now);

        let (provisional, composer, request) = {
            let mut state = self.conversation.state.lock();

            let Some(content) = state.composer.trimmed_text().map(ToString::to_string) else {
                return Ok(SendOutcome::Skipped);
            };

            let composer = state.composer.take();
            let conversation = state.conversation.as_ref();

            let attachments = conversation
                .and_then(|conversation| conversation.product.as_ref())
                .filter(|_| composer.attach_product)
                .map(|product| Attachment::product(product.id.clone()))
                .into_iter()
                .collect::<Vec<_>>();

            let recipient = conversation
                .and_then(|conversation| conversation.counterpart(&user.id))
                .cloned();

            let message = Message {
                id: self.message_id_provider.new_id(),
                conversation_id: self.id().clone(),
                sender: user.summary(),
                recipient,
                content: content.clone(),
                attachments: attachments.clone(),
                created_at: now,
                is_read: false,
                read_at: None,
                is_optimistic: true,
            };
            state.messages.append(message.clone());

            (
                message,
                composer,
                SendMessageRequest {
                    content,
                    attachments,
                },
            )
        };

        let provisional_id = provisional.id.clone();

        self.client_event_dispatcher.dispatch_conversation_event(
            self.id(),
            ConversationEventType::MessagesAppended {
                message_ids: vec![provisional_id.clone()],
            },
        );
        self.client_event_dispatcher
            .dispatch_conversation_event(self.id(), ConversationEventType::ScrollToNewest);

        let result = self.messaging_service.send_message(self.id(), request).await;

        let (outcome, events) = {
            let mut state = self.conversation.state.lock();
            let confirmed_id = state.confirmed_provisionals.remove(&provisional_id);

            match result {
                Ok(mut message) => {
                    // The server may only return the IDs of the participants.
                    message.fill_missing_participants(
                        &provisional.sender,
                        provisional.recipient.as_ref(),
                    );
                    let new_id = message.id.clone();
                    let replacement = state.messages.replace(&provisional_id, message.clone());
                    state.visibility.forget(&provisional_id);

                    let event = match replacement {
                        Replacement::Replaced => ConversationEventType::MessageReplaced {
                            old_id: provisional_id,
                            new_id: new_id.clone(),
                        },
                        Replacement::Merged => ConversationEventType::MessagesUpdated {
                            message_ids: vec![new_id.clone()],
                        },
                        Replacement::Appended => ConversationEventType::MessagesAppended {
                            message_ids: vec![new_id.clone()],
                        },
                    };
                    let stored = state.messages.get(&new_id).cloned().unwrap_or(message);
                    (SendOutcome::Sent(stored), vec![event])
                }
                Err(err) => match confirmed_id.and_then(|id| state.messages.get(&id).cloned()) {
                    Some(message) => {
                        warn!(
                            "Sending message failed but the server pushed it already. {}",
                            err.to_string()
                        );
                        (SendOutcome::Sent(message), vec![])
                    }
                    None => {
                        error!("Failed to send message. {}", err.to_string());
                        state.messages.remove(&provisional_id);
                        state.visibility.forget(&provisional_id);
                        state.composer = composer;

                        let reason = err.to_string();
                        (
                            SendOutcome::Failed {
                                reason: reason.clone(),
                            },
                            vec![
                                ConversationEventType::MessagesDeleted {
                                    message_ids: vec![provisional_id],
                                },
                                ConversationEventType::SendFailed { reason },
                            ],
                        )
                    }
                },
            }
        };

        for event in events {
            self.client_event_dispatcher
                .dispatch_conversation_event(self.id(), event);
        }

        Ok(outcome)
    }

    fn set_message_visibility(&self, id: &MessageId, is_visible: bool) -> bool {
        let Ok(user_id) = self.ctx.current_user_id() else {
            return false;
        };

        let needs_receipt = {
            let mut guard = self.conversation.state.lock();
            let state = &mut *guard;
            // Only stored messages are tracked.
            let Some(message) = state.messages.get(id) else {
                state.visibility.forget(id);
                return false;
            };
            let needs_receipt =
                message.is_addressed_to(&user_id) && !message.is_read && !message.is_optimistic;

            state.visibility.set_visible(id, is_visible) && needs_receipt
        };

        if !needs_receipt {
            return false;
        }

        if let Err(err) = self.chat_transport.mark_message_as_seen(id) {
            debug!("Failed to send read receipt for {}. {}", id, err);
        }
        true
    }

    fn emit_typing(&self, is_typing: bool) {
        if let Err(err) = self.chat_transport.emit_typing(self.id(), is_typing) {
            debug!("Failed to send typing state. {}", err);
        }
    }

    fn record_activity(&self) {
        self.ctx.record_activity(self.time_provider.now())
    }
}
