// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use green_core_client::infra::session::FileSessionRepository;
use green_core_client::test::mock_data;
use green_core_client::SessionRepository;

#[tokio::test]
async fn test_persists_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("auth").join("session.json");
    let repo = FileSessionRepository::new(&path);

    assert_eq!(repo.get().await?, None);

    repo.set(&mock_data::session()).await?;
    assert!(path.exists());

    // A second repository reads what the first one wrote.
    let other_repo = FileSessionRepository::new(&path);
    assert_eq!(other_repo.get().await?, Some(mock_data::session()));

    repo.clear().await?;
    assert_eq!(other_repo.get().await?, None);
    other_repo.clear().await?;

    Ok(())
}

#[tokio::test]
async fn test_fails_on_corrupt_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json")?;

    let repo = FileSessionRepository::new(&path);
    assert!(repo.get().await.is_err());

    Ok(())
}
