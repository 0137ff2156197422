use super::*;

fn param(match_id: i32, location_name: &str) -> CreateQuestParam {
    CreateQuestParam {
        match_id,
        location_name: location_name.to_string(),
        activity: "Coffee date".to_string(),
        quest_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        location_latitude: Some(40.0),
        location_longitude: Some(-3.7),
        hint_user1: String::new(),
        hint_user2: String::new(),
        status_user1: ProgressStatus::Pending,
        status_user2: ProgressStatus::Pending,
        xp_reward: Some(5),
    }
}

/// Tests creating a quest.
///
/// Verifies that the quest comes back with its match reference and that the
/// location is then reported as used for the match.
///
/// Expected: Ok(Quest)
#[tokio::test]
async fn creates_quest_with_match_ref() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, bob, user_match, _) = factory::helpers::create_match_with_chat(db).await?;

    let repo = QuestRepository::new(db);
    let quest = repo.create(param(user_match.id, "Cafe Central")).await?;

    assert_eq!(quest.user_match.id, user_match.id);
    assert_eq!(quest.user_match.user1_id, alice.id);
    assert_eq!(quest.user_match.user2_id, bob.id);
    assert_eq!(quest.xp_reward, Some(5));
    assert!(repo.location_exists(user_match.id, "Cafe Central").await?);
    assert_eq!(
        repo.get_location_names(user_match.id).await?,
        vec!["Cafe Central".to_string()]
    );

    Ok(())
}

/// Tests that used locations are tracked per match.
///
/// Verifies that a location used by one match is still free for another.
///
/// Expected: location_exists true only for the match that used it
#[tokio::test]
async fn tracks_locations_per_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;
    let (_, _, other_match, _) = factory::helpers::create_match_with_chat(db).await?;

    let repo = QuestRepository::new(db);
    repo.create(param(user_match.id, "Retiro Park")).await?;

    assert!(repo.location_exists(user_match.id, "Retiro Park").await?);
    assert!(!repo.location_exists(other_match.id, "Retiro Park").await?);

    Ok(())
}
