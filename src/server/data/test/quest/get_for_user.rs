use super::*;

/// Tests listing quests of a user's matches.
///
/// Verifies that quests of other users' matches are excluded and the rest are
/// ordered by quest date descending.
///
/// Expected: Ok(Vec) with the user's two quests, latest date first
#[tokio::test]
async fn lists_quests_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let (_, _, other_match, _) = factory::helpers::create_match_with_chat(db).await?;

    let today = Utc::now().date_naive();
    let earlier = factory::quest::QuestFactory::new(db, user_match.id)
        .quest_date(today - Duration::days(3))
        .build()
        .await?;
    let later = factory::quest::QuestFactory::new(db, user_match.id)
        .quest_date(today)
        .build()
        .await?;
    factory::quest::create_quest(db, other_match.id).await?;

    let quests = QuestRepository::new(db).get_for_user(alice.id).await?;

    let ids: Vec<i32> = quests.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}
