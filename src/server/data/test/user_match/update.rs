use super::*;

/// Tests a partial match update.
///
/// Expected: only the supplied status and rating change
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let user_match = factory::user_match::create_match(db, alice.id, bob.id).await?;

    let updated = MatchRepository::new(db)
        .update(
            user_match.id,
            UpdateMatchParam {
                status_user2: Some(ProgressStatus::Completed),
                user1_rating: Some(4),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status_user1, ProgressStatus::Pending);
    assert_eq!(updated.status_user2, ProgressStatus::Completed);
    assert_eq!(updated.user1_rating, Some(4));
    assert_eq!(updated.user2_rating, None);

    Ok(())
}

/// Tests storing a rating for the second participant.
///
/// Expected: user2_rating is set and user1_rating untouched
#[tokio::test]
async fn sets_rating_by_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let user_match = factory::user_match::MatchFactory::new(db, alice.id, bob.id)
        .ratings(Some(2), None)
        .build()
        .await?;

    let updated = MatchRepository::new(db)
        .set_rating(user_match.id, MatchSide::User2, 5)
        .await?
        .unwrap();

    assert_eq!(updated.user1_rating, Some(2));
    assert_eq!(updated.user2_rating, Some(5));

    Ok(())
}

/// Tests updating an unknown match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchRepository::new(db)
        .update(77, UpdateMatchParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
