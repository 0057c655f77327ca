// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::TimeDelta;
use mockall::predicate;

use green_core_client::app::event_handlers::{
    ReadReceiptsEventHandler, ServerEvent, ServerEventHandler,
};
use green_core_client::domain::messaging::models::ActiveConversation;
use green_core_client::dtos::{MessageSeenEvent, MessagesSeenEvent};
use green_core_client::test::{mock_data, MessageBuilder, MockAppDependencies};
use green_core_client::ConversationEventType;

fn conversation() -> ActiveConversation {
    let conversation = ActiveConversation::new(mock_data::conversation_id());
    conversation.state.lock().messages.hydrate([
        MessageBuilder::new_with_index(1).build_message(),
        MessageBuilder::new_with_index(2)
            .set_from_account()
            .build_message(),
        MessageBuilder::new_with_index(3)
            .set_from_account()
            .set_optimistic()
            .set_id("tmp-3")
            .build_message(),
    ]);
    conversation
}

#[test]
fn test_bulk_seen_marks_own_messages() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_conversation_event()
        .once()
        .with(
            predicate::eq(mock_data::conversation_id()),
            predicate::eq(ConversationEventType::MessagesUpdated {
                message_ids: vec![MessageBuilder::id_for_index(2)],
            }),
        )
        .return_const(());

    let conversation = conversation();
    let handler = ReadReceiptsEventHandler::from(&deps.into_deps());
    let seen_at = mock_data::reference_date() + TimeDelta::hours(2);

    let event = ServerEvent::MessagesSeen(MessagesSeenEvent {
        conversation_id: mock_data::conversation_id(),
        seen_by: mock_data::counterpart_id(),
        seen_at,
    });

    // The second delivery doesn't change anything and thus doesn't dispatch an event.
    handler.handle_event(&conversation, event.clone())?;
    handler.handle_event(&conversation, event)?;

    let state = conversation.state.lock();
    let messages = state.messages.messages();
    assert!(!messages[0].is_read);
    assert_eq!(messages[1].read_at, Some(seen_at));
    assert!(!messages[2].is_read);

    Ok(())
}

#[test]
fn test_ignores_own_bulk_seen() -> Result<()> {
    let deps = MockAppDependencies::default();

    let conversation = conversation();
    let handler = ReadReceiptsEventHandler::from(&deps.into_deps());

    handler.handle_event(
        &conversation,
        ServerEvent::MessagesSeen(MessagesSeenEvent {
            conversation_id: mock_data::conversation_id(),
            seen_by: mock_data::account_id(),
            seen_at: mock_data::reference_date(),
        }),
    )?;

    assert!(conversation
        .state
        .lock()
        .messages
        .messages()
        .iter()
        .all(|message| !message.is_read));

    Ok(())
}

#[test]
fn test_single_seen() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_conversation_event()
        .once()
        .with(
            predicate::eq(mock_data::conversation_id()),
            predicate::eq(ConversationEventType::MessagesUpdated {
                message_ids: vec![MessageBuilder::id_for_index(1)],
            }),
        )
        .return_const(());

    let conversation = conversation();
    let handler = ReadReceiptsEventHandler::from(&deps.into_deps());
    let seen_at = mock_data::reference_date() + TimeDelta::hours(1);

    let event = |message_id| {
        ServerEvent::MessageSeen(MessageSeenEvent {
            conversation_id: mock_data::conversation_id(),
            message_id,
            seen_at,
        })
    };

    handler.handle_event(&conversation, event(MessageBuilder::id_for_index(1)))?;
    // Already read…
    handler.handle_event(&conversation, event(MessageBuilder::id_for_index(1)))?;
    // Unknown…
    handler.handle_event(&conversation, event("msg-404".into()))?;

    let state = conversation.state.lock();
    assert_eq!(state.messages.messages()[0].read_at, Some(seen_at));
    assert_eq!(state.messages.len(), 3);

    Ok(())
}
