// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::TimeDelta;
use mockall::predicate;
use pretty_assertions::assert_eq;

use green_core_client::app::event_handlers::{
    MessagesEventHandler, ServerEvent, ServerEventHandler,
};
use green_core_client::domain::messaging::models::ActiveConversation;
use green_core_client::dtos::MessageId;
use green_core_client::test::{mock_data, MessageBuilder, MockAppDependencies};
use green_core_client::ConversationEventType;

fn conversation_with(messages: Vec<MessageBuilder>) -> ActiveConversation {
    let conversation = ActiveConversation::new(mock_data::conversation_id());
    conversation
        .state
        .lock()
        .messages
        .hydrate(messages.into_iter().map(MessageBuilder::build_message));
    conversation
}

fn expect_events(deps: &mut MockAppDependencies, events: Vec<ConversationEventType>) {
    let mut seq = mockall::Sequence::new();
    for event in events {
        deps.client_event_dispatcher
            .expect_dispatch_conversation_event()
            .once()
            .in_sequence(&mut seq)
            .with(
                predicate::eq(mock_data::conversation_id()),
                predicate::eq(event),
            )
            .return_const(());
    }
}

#[test]
fn test_appends_new_message() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_events(
        &mut deps,
        vec![
            ConversationEventType::MessagesAppended {
                message_ids: vec![MessageBuilder::id_for_index(2)],
            },
            ConversationEventType::ScrollToNewest,
        ],
    );

    let conversation = conversation_with(vec![MessageBuilder::new_with_index(1)]);
    let handler = MessagesEventHandler::from(&deps.into_deps());

    let result = handler.handle_event(
        &conversation,
        ServerEvent::Message(MessageBuilder::new_with_index(2).build_message()),
    )?;

    assert!(result.is_none());
    assert_eq!(conversation.state.lock().messages.len(), 2);

    Ok(())
}

#[test]
fn test_drops_duplicate_message() -> Result<()> {
    let deps = MockAppDependencies::default();

    let conversation = conversation_with(vec![MessageBuilder::new_with_index(1)]);
    let handler = MessagesEventHandler::from(&deps.into_deps());

    handler.handle_event(
        &conversation,
        ServerEvent::Message(
            MessageBuilder::new_with_index(1)
                .set_content("Changed")
                .build_message(),
        ),
    )?;

    let state = conversation.state.lock();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(
        state.messages.get(&MessageBuilder::id_for_index(1)).unwrap().content,
        "Message 1"
    );

    Ok(())
}

#[test]
fn test_replaces_pending_message_with_echo() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_events(
        &mut deps,
        vec![
            ConversationEventType::MessageReplaced {
                old_id: "tmp-1".into(),
                new_id: "srv-1".into(),
            },
            ConversationEventType::ScrollToNewest,
        ],
    );

    let conversation = conversation_with(vec![
        MessageBuilder::new_with_index(1),
        MessageBuilder::new_with_index(2)
            .set_id("tmp-1")
            .set_from_account()
            .set_content("On my way")
            .set_optimistic(),
    ]);
    conversation
        .state
        .lock()
        .visibility
        .set_visible(&"tmp-1".into(), true);

    let handler = MessagesEventHandler::from(&deps.into_deps());
    handler.handle_event(
        &conversation,
        ServerEvent::Message(
            MessageBuilder::new_with_index(2)
                .set_id("srv-1")
                .set_from_account()
                .set_content("On my way")
                .set_created_at(
                    mock_data::reference_date() + TimeDelta::minutes(2) + TimeDelta::seconds(3),
                )
                .build_message(),
        ),
    )?;

    let state = conversation.state.lock();
    assert_eq!(
        state
            .messages
            .messages()
            .iter()
            .map(|message| message.id.clone())
            .collect::<Vec<_>>(),
        vec![MessageBuilder::id_for_index(1), MessageId::from("srv-1")]
    );
    assert!(!state.messages.messages()[1].is_optimistic);
    assert!(!state.visibility.is_visible(&"tmp-1".into()));
    assert_eq!(
        state.confirmed_provisionals.get(&MessageId::from("tmp-1")),
        Some(&MessageId::from("srv-1"))
    );

    Ok(())
}

#[test]
fn test_does_not_match_message_from_counterpart() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_events(
        &mut deps,
        vec![
            ConversationEventType::MessagesAppended {
                message_ids: vec!["srv-1".into()],
            },
            ConversationEventType::ScrollToNewest,
        ],
    );

    let conversation = conversation_with(vec![MessageBuilder::new_with_index(1)
        .set_id("tmp-1")
        .set_from_account()
        .set_content("Hi")
        .set_optimistic()]);

    let handler = MessagesEventHandler::from(&deps.into_deps());
    handler.handle_event(
        &conversation,
        ServerEvent::Message(
            MessageBuilder::new_with_index(1)
                .set_id("srv-1")
                .set_content("Hi")
                .build_message(),
        ),
    )?;

    assert_eq!(conversation.state.lock().messages.len(), 2);

    Ok(())
}

#[test]
fn test_passes_on_other_events() -> Result<()> {
    let deps = MockAppDependencies::default();
    let conversation = conversation_with(vec![]);
    let handler = MessagesEventHandler::from(&deps.into_deps());

    let event = ServerEvent::Typing(green_core_client::dtos::TypingEvent {
        conversation_id: mock_data::conversation_id(),
        user_id: mock_data::counterpart_id(),
        is_typing: true,
    });

    assert_eq!(
        handler.handle_event(&conversation, event.clone())?,
        Some(event)
    );

    Ok(())
}
