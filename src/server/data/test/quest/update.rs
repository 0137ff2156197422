use super::*;

/// Tests a partial quest update.
///
/// Expected: only the supplied status changes
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let quest = factory::quest::create_quest(db, user_match.id).await?;

    let updated = QuestRepository::new(db)
        .update(
            quest.id,
            UpdateQuestParam {
                status_user1: Some(ProgressStatus::Completed),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status_user1, ProgressStatus::Completed);
    assert_eq!(updated.status_user2, ProgressStatus::Pending);
    assert_eq!(updated.location_name, quest.location_name);

    Ok(())
}

/// Tests storing a hint for one side.
///
/// Expected: hint_user2 is set and hint_user1 untouched
#[tokio::test]
async fn sets_hint_by_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let quest = factory::quest::create_quest(db, user_match.id).await?;

    let updated = QuestRepository::new(db)
        .set_hint(quest.id, MatchSide::User2, "Red scarf".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.hint_user2, "Red scarf");
    assert_eq!(updated.hint_user1, "");

    Ok(())
}

/// Tests deleting a quest.
///
/// Expected: Ok(true), then the quest is gone
#[tokio::test]
async fn deletes_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let quest = factory::quest::create_quest(db, user_match.id).await?;

    let repo = QuestRepository::new(db);

    assert!(repo.delete(quest.id).await?);
    assert!(repo.find_by_id(quest.id).await?.is_none());

    Ok(())
}
