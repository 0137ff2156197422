use super::*;

/// Tests attaching a preference twice.
///
/// Verifies that the second call returns the existing link instead of adding
/// a duplicate.
///
/// Expected: Ok(Some) both times, a single link listed
#[tokio::test]
async fn attaches_preference_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let preference = factory::preference::create_preference_named(db, "Climbing").await?;

    let repo = UserPreferenceRepository::new(db);
    let first = repo.get_or_create(user.id, preference.id).await?.unwrap();
    let second = repo.get_or_create(user.id, preference.id).await?.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.preference.name, "Climbing");
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests attaching an unknown preference.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = UserPreferenceRepository::new(db)
        .get_or_create(user.id, 123)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests attaching several preferences at once.
///
/// Expected: every preference is listed for the user
#[tokio::test]
async fn creates_many_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let a = factory::preference::create_preference(db).await?;
    let b = factory::preference::create_preference(db).await?;

    let repo = UserPreferenceRepository::new(db);
    repo.create_many(user.id, &[a.id, b.id]).await?;

    assert_eq!(repo.get_by_user(user.id).await?.len(), 2);

    Ok(())
}
