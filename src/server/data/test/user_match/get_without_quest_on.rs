use super::*;

/// Tests listing matches without a quest on a date.
///
/// Verifies that a match with a quest that day is skipped while a match with a
/// quest on another day is kept.
///
/// Expected: Ok(Vec) with only the unserved match
#[tokio::test]
async fn skips_matches_served_that_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;

    let today = Utc::now().date_naive();
    let served = factory::user_match::create_match(db, alice.id, bob.id).await?;
    let unserved = factory::user_match::create_match(db, alice.id, carol.id).await?;
    factory::quest::QuestFactory::new(db, served.id)
        .quest_date(today)
        .build()
        .await?;
    factory::quest::QuestFactory::new(db, unserved.id)
        .quest_date(today - Duration::days(1))
        .build()
        .await?;

    let refs = MatchRepository::new(db).get_without_quest_on(today).await?;

    let ids: Vec<i32> = refs.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![unserved.id]);

    Ok(())
}
