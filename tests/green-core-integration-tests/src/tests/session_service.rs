// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::TimeDelta;
use mockall::predicate;
use pretty_assertions::assert_eq;

use green_core_client::app::services::SessionService;
use green_core_client::test::{mock_data, ConstantTimeProvider, MockAppDependencies};
use green_core_client::{ClientEvent, SignOutReason};

#[tokio::test]
async fn test_sign_in_persists_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.reset_session();

    deps.session_repo
        .expect_set()
        .once()
        .with(predicate::eq(mock_data::session()))
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SignedIn {
            user_id: mock_data::account_id(),
        }))
        .return_const(());

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);
    service.sign_in(mock_data::session()).await?;

    assert_eq!(deps.ctx.current_user()?, mock_data::account());
    assert_eq!(deps.ctx.last_activity(), Some(mock_data::reference_date()));

    Ok(())
}

#[tokio::test]
async fn test_restores_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.reset_session();

    deps.session_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(Some(mock_data::session())) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .return_const(());

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    assert_eq!(service.restore_session().await?, Some(mock_data::account()));
    assert!(deps.ctx.bearer_token().is_ok());

    Ok(())
}

#[tokio::test]
async fn test_restore_without_persisted_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.reset_session();

    deps.session_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(None) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    assert_eq!(service.restore_session().await?, None);
    assert!(!deps.ctx.is_signed_in());

    Ok(())
}

#[tokio::test]
async fn test_signs_out_idle_user() -> Result<()> {
    let time_provider = Arc::new(ConstantTimeProvider::new(mock_data::reference_date()));

    let mut deps = MockAppDependencies::default();
    deps.time_provider = time_provider.clone();

    deps.session_repo
        .expect_clear()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SignedOut {
            reason: SignOutReason::Idle,
        }))
        .return_const(());

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    time_provider.advance(TimeDelta::minutes(20));
    service.record_activity();

    time_provider.advance(TimeDelta::minutes(29));
    assert!(!service.sign_out_if_idle().await?);

    time_provider.advance(TimeDelta::minutes(2));
    assert!(service.sign_out_if_idle().await?);
    assert!(!deps.ctx.is_signed_in());

    // Signed out users can't be idle.
    time_provider.advance(TimeDelta::hours(2));
    assert!(!service.sign_out_if_idle().await?);

    Ok(())
}

#[tokio::test]
async fn test_sign_out_survives_storage_failure() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.session_repo
        .expect_clear()
        .once()
        .return_once(|| Box::pin(async { Err(anyhow!("Disk full")) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SignedOut {
            reason: SignOutReason::UserInitiated,
        }))
        .return_const(());

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    assert!(service.sign_out().await.is_err());
    assert!(!deps.ctx.is_signed_in());

    // Signing out twice is a no-op.
    service.sign_out().await?;

    Ok(())
}
