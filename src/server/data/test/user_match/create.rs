use super::*;

/// Tests creating a match.
///
/// Verifies that both participants are resolved to summaries and both sides
/// start pending without ratings.
///
/// Expected: Ok(UserMatch)
#[tokio::test]
async fn creates_pending_match_with_summaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user_with_email(db, "alice@example.com").await?;
    let bob = factory::user::create_user_with_email(db, "bob@example.com").await?;

    let user_match = MatchRepository::new(db)
        .create(CreateMatchParam {
            user1_id: alice.id,
            user2_id: bob.id,
            matched_at: Some(Utc::now()),
        })
        .await?;

    assert_eq!(user_match.user1.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user_match.user2.id, bob.id);
    assert_eq!(user_match.status_user1, ProgressStatus::Pending);
    assert_eq!(user_match.status_user2, ProgressStatus::Pending);
    assert_eq!(user_match.user1_rating, None);

    Ok(())
}
