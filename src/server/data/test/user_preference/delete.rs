use super::*;

/// Tests detaching a preference.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn detaches_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let preference = factory::preference::create_preference(db).await?;
    factory::user_preference::create_user_preference(db, user.id, preference.id).await?;

    let repo = UserPreferenceRepository::new(db);

    assert!(repo.delete(user.id, preference.id).await?);
    assert!(!repo.delete(user.id, preference.id).await?);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}
