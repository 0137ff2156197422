use super::*;

/// Tests a partial profile update.
///
/// Verifies that supplied fields change and omitted fields keep their values.
///
/// Expected: Ok(Some(Profile)) with only nickname and latitude changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, before, _) = factory::helpers::create_account(db).await?;

    let updated = ProfileRepository::new(db)
        .update(
            user.id,
            UpdateProfileParam {
                nickname: Some("Cap".to_string()),
                home_latitude: Some(10.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.nickname, "Cap");
    assert_eq!(updated.home_latitude, Some(10.0));
    assert_eq!(updated.full_name, before.full_name);
    assert_eq!(updated.home_longitude, before.home_longitude);

    Ok(())
}

/// Tests updating a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileRepository::new(db)
        .update(404, UpdateProfileParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests setting the matched flag on several profiles at once.
///
/// Expected: both profiles report is_matched
#[tokio::test]
async fn sets_matched_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _, _) = factory::helpers::create_account(db).await?;
    let (bob, _, _) = factory::helpers::create_account(db).await?;

    let repo = ProfileRepository::new(db);
    repo.set_matched(&[alice.id, bob.id], true).await?;

    assert!(repo.find_by_user_id(alice.id).await?.unwrap().is_matched);
    assert!(repo.find_by_user_id(bob.id).await?.unwrap().is_matched);

    Ok(())
}
