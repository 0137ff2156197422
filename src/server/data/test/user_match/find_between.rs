use super::*;

/// Tests finding a match between two users in either order.
///
/// Expected: Ok(Some) for both orders, Ok(None) for an unmatched pair
#[tokio::test]
async fn finds_match_in_either_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;
    let user_match = factory::user_match::create_match(db, alice.id, bob.id).await?;

    let repo = MatchRepository::new(db);

    assert_eq!(
        repo.find_between(alice.id, bob.id).await?.map(|m| m.id),
        Some(user_match.id)
    );
    assert_eq!(
        repo.find_between(bob.id, alice.id).await?.map(|m| m.id),
        Some(user_match.id)
    );
    assert!(repo.find_between(alice.id, carol.id).await?.is_none());

    Ok(())
}
