use super::*;

/// Tests listing a user's matches.
///
/// Verifies that matches on either side are returned, newest match time first,
/// and that matches of other users are excluded.
///
/// Expected: Ok(Vec) with two matches ordered by matched_at descending
#[tokio::test]
async fn lists_matches_on_either_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;
    let dave = factory::user::create_user(db).await?;

    let now = Utc::now();
    let older = factory::user_match::MatchFactory::new(db, alice.id, bob.id)
        .matched_at(Some(now - Duration::days(2)))
        .build()
        .await?;
    let newer = factory::user_match::MatchFactory::new(db, carol.id, alice.id)
        .matched_at(Some(now))
        .build()
        .await?;
    factory::user_match::create_match(db, bob.id, dave.id).await?;

    let repo = MatchRepository::new(db);
    let matches = repo.get_for_user(alice.id).await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let mut partners = repo.get_partner_ids(alice.id).await?;
    partners.sort();
    assert_eq!(partners, vec![bob.id, carol.id]);

    Ok(())
}
