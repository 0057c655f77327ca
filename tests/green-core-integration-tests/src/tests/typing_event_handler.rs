// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;

use green_core_client::app::event_handlers::{ServerEvent, ServerEventHandler, TypingEventHandler};
use green_core_client::domain::messaging::models::ActiveConversation;
use green_core_client::dtos::{TypingEvent, UserId};
use green_core_client::test::{mock_data, MockAppDependencies};
use green_core_client::ConversationEventType;

fn typing(user_id: UserId, is_typing: bool) -> ServerEvent {
    ServerEvent::Typing(TypingEvent {
        conversation_id: mock_data::conversation_id(),
        user_id,
        is_typing,
    })
}

#[test]
fn test_tracks_counterpart_typing() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_conversation_event()
        .times(2)
        .with(
            predicate::eq(mock_data::conversation_id()),
            predicate::eq(ConversationEventType::ComposingUsersChanged),
        )
        .return_const(());

    let conversation = ActiveConversation::new(mock_data::conversation_id());
    let handler = TypingEventHandler::from(&deps.into_deps());

    handler.handle_event(&conversation, typing(mock_data::counterpart_id(), true))?;
    handler.handle_event(&conversation, typing(mock_data::counterpart_id(), true))?;
    assert!(conversation.state.lock().counterpart_is_typing);

    handler.handle_event(&conversation, typing(mock_data::account_id(), false))?;
    assert!(conversation.state.lock().counterpart_is_typing);

    handler.handle_event(&conversation, typing(mock_data::counterpart_id(), false))?;
    assert!(!conversation.state.lock().counterpart_is_typing);

    Ok(())
}
