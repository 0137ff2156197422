use super::*;

/// Tests claiming the award of a quest both sides completed.
///
/// Expected: the first claim wins, later claims get false
#[tokio::test]
async fn claims_completed_quest_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let quest = factory::quest::create_quest(db, user_match.id).await?;

    let repo = QuestRepository::new(db);
    repo.update(
        quest.id,
        UpdateQuestParam {
            status_user1: Some(ProgressStatus::Completed),
            status_user2: Some(ProgressStatus::Completed),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.claim_xp_award(quest.id).await?);
    assert!(!repo.claim_xp_award(quest.id).await?);

    Ok(())
}

/// Tests claiming the award of a quest only one side completed.
///
/// Expected: nothing is claimed
#[tokio::test]
async fn ignores_unfinished_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let quest = factory::quest::QuestFactory::new(db, user_match.id)
        .statuses(ProgressStatus::Completed, ProgressStatus::Pending)
        .build()
        .await?;

    let repo = QuestRepository::new(db);

    assert!(!repo.claim_xp_award(quest.id).await?);
    assert!(!repo.claim_xp_award(404).await?);

    Ok(())
}

/// Tests a quest inserted with both sides already completed.
///
/// Expected: it counts as awarded and cannot be claimed
#[tokio::test]
async fn created_completed_quest_is_not_claimable() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let quest = QuestRepository::new(db)
        .create(CreateQuestParam {
            match_id: user_match.id,
            location_name: "Harbor".to_string(),
            activity: "Walk".to_string(),
            quest_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            location_latitude: None,
            location_longitude: None,
            hint_user1: String::new(),
            hint_user2: String::new(),
            status_user1: ProgressStatus::Completed,
            status_user2: ProgressStatus::Completed,
            xp_reward: Some(5),
        })
        .await?;

    assert!(!QuestRepository::new(db).claim_xp_award(quest.id).await?);

    Ok(())
}
