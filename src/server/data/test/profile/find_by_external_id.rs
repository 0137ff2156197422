use super::*;

/// Tests finding a profile by identity provider subject.
///
/// Expected: Ok(Some(Profile)) for the stored subject, Ok(None) otherwise
#[tokio::test]
async fn finds_profile_by_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::user_profile::ProfileFactory::new(db, user.id)
        .external_id("auth0|abc123")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);

    let found = repo.find_by_external_id("auth0|abc123").await?;
    assert_eq!(found.map(|p| p.user_id), Some(user.id));
    assert!(repo.find_by_external_id("auth0|other").await?.is_none());

    Ok(())
}

/// Tests recording an identity provider subject.
///
/// Expected: the profile is found by the new subject and flagged as a service account
#[tokio::test]
async fn records_external_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_account(db).await?;

    let repo = ProfileRepository::new(db);
    repo.set_external_identity(user.id, "svc@clients".to_string(), true)
        .await?;

    let profile = repo.find_by_external_id("svc@clients").await?.unwrap();
    assert_eq!(profile.user_id, user.id);
    assert!(profile.is_service_account);

    Ok(())
}
