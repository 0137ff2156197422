use super::*;

/// Tests listing rated matches.
///
/// Verifies that unrated matches are excluded and the rest come oldest match
/// time first.
///
/// Expected: Ok(Vec) with the two rated matches, oldest first
#[tokio::test]
async fn lists_rated_matches_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;

    let now = Utc::now();
    let newer = factory::user_match::MatchFactory::new(db, alice.id, bob.id)
        .matched_at(Some(now))
        .ratings(None, Some(1))
        .build()
        .await?;
    let older = factory::user_match::MatchFactory::new(db, alice.id, carol.id)
        .matched_at(Some(now - Duration::days(3)))
        .ratings(Some(5), None)
        .build()
        .await?;
    factory::user_match::create_match(db, bob.id, carol.id).await?;

    let rated = MatchRepository::new(db).get_rated().await?;

    let ids: Vec<i32> = rated.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}
