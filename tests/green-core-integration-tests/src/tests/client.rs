// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use green_core_client::domain::messaging::services::mocks::MockMessagingService;
use green_core_client::dtos::ConversationHistory;
use green_core_client::infra::session::FileSessionRepository;
use green_core_client::infra::transport::LocalChatTransport;
use green_core_client::test::{mock_data, ConstantTimeProvider, MessageBuilder};
use green_core_client::{
    Client, ClientEvent, ConversationEventType, SendOutcome, SignOutReason,
    WrappingMessageIdProvider,
};

use super::helpers::RecordingDelegate;

fn messaging_service() -> MockMessagingService {
    let mut service = MockMessagingService::new();
    service.expect_load_conversation().returning(|_| {
        Box::pin(async {
            Ok(ConversationHistory {
                conversation: mock_data::conversation(),
                messages: vec![MessageBuilder::new_with_index(1).build_message()],
            })
        })
    });
    service
        .expect_mark_conversation_read()
        .returning(|_| Box::pin(async { Ok(()) }));
    service.expect_send_message().returning(|_, request| {
        Box::pin(async move {
            Ok(MessageBuilder::new_with_index(2)
                .set_id("srv-1")
                .set_from_account()
                .set_content(request.content)
                .set_created_at(mock_data::reference_date())
                .build_message())
        })
    });
    service
}

fn client(
    session_path: &Path,
    transport: Arc<LocalChatTransport>,
    delegate: RecordingDelegate,
) -> Result<Client> {
    Client::builder()
        .set_shared_transport(transport)
        .set_messaging_service(messaging_service())
        .set_session_repository(FileSessionRepository::new(session_path))
        .set_time_provider(ConstantTimeProvider::new(mock_data::reference_date()))
        .set_message_id_provider(WrappingMessageIdProvider::incrementing("msg"))
        .set_delegate(Some(Box::new(delegate)))
        .build()
}

#[tokio::test]
async fn test_chat_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let session_path = dir.path().join("session.json");
    let transport = Arc::new(LocalChatTransport::new());
    let delegate = RecordingDelegate::default();

    let client = client(&session_path, transport.clone(), delegate.clone())?;
    assert!(client
        .open_conversation(&mock_data::conversation_id())
        .await
        .is_err());

    client.sign_in(mock_data::session()).await?;
    assert_eq!(client.current_user(), Some(mock_data::account()));

    let view = client
        .open_conversation(&mock_data::conversation_id())
        .await?;
    view.set_composer_text("Hello there");

    let SendOutcome::Sent(message) = view.send_message().await? else {
        panic!("Expected message to be sent");
    };
    assert_eq!(message.content, "Hello there");
    assert_eq!(view.messages().len(), 2);

    let events = std::mem::take(&mut *delegate.events.lock());
    assert_eq!(
        events.first(),
        Some(&ClientEvent::SignedIn {
            user_id: mock_data::account_id()
        })
    );
    assert!(events.contains(&ClientEvent::ConversationChanged {
        conversation_id: mock_data::conversation_id(),
        r#type: ConversationEventType::MessageReplaced {
            old_id: "tmp-msg-1".into(),
            new_id: "srv-1".into(),
        },
    }));

    drop(view);
    assert_eq!(transport.handler_count(), 0);

    // A new client picks up the persisted session.
    let restored = client_with_restored_session(&session_path).await?;
    assert_eq!(restored.current_user(), Some(mock_data::account()));

    client.sign_out().await?;
    assert_eq!(client.current_user(), None);
    assert!(!session_path.exists());
    assert_eq!(
        delegate.events.lock().last(),
        Some(&ClientEvent::SignedOut {
            reason: SignOutReason::UserInitiated
        })
    );

    Ok(())
}

async fn client_with_restored_session(session_path: &Path) -> Result<Client> {
    let client = client(
        session_path,
        Arc::new(LocalChatTransport::new()),
        RecordingDelegate::default(),
    )?;
    client.restore_session().await?;
    Ok(client)
}
