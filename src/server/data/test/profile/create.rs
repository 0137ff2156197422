use super::*;

/// Tests creating a profile for an existing user.
///
/// Verifies that the returned profile is joined with the owner's username and
/// email and starts with zero XP.
///
/// Expected: Ok(Profile)
#[tokio::test]
async fn creates_profile_joined_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "carol@example.com").await?;

    let profile = ProfileRepository::new(db)
        .create(
            user.id,
            CreateProfileParam {
                full_name: "Carol Danvers".to_string(),
                home_latitude: Some(51.5),
                home_longitude: Some(-0.12),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(profile.user_id, user.id);
    assert_eq!(profile.email.as_deref(), Some("carol@example.com"));
    assert_eq!(profile.username, user.username);
    assert_eq!(profile.full_name, "Carol Danvers");
    assert_eq!(profile.total_xp, 0);
    assert!(!profile.is_matched);

    Ok(())
}

/// Tests looking up a user that has no profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    assert!(ProfileRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .is_none());

    Ok(())
}
