use super::*;

/// Tests creating the chat of a match.
///
/// Expected: Ok(Chat) active and linked to the match
#[tokio::test]
async fn creates_chat_for_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let user_match = factory::user_match::create_match(db, alice.id, bob.id).await?;

    let repo = ChatRepository::new(db);
    let chat = repo
        .create(MatchRef::from_entity(&user_match), ChatStatus::Active)
        .await?;

    assert_eq!(chat.user_match.id, user_match.id);
    assert_eq!(chat.status, ChatStatus::Active);
    assert!(repo.exists_for_match(user_match.id).await?);

    Ok(())
}

/// Tests that a match can only have one chat.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_second_chat_for_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, user_match, _) = factory::helpers::create_match_with_chat(db).await?;

    let result = ChatRepository::new(db)
        .create(MatchRef::from_entity(&user_match), ChatStatus::Active)
        .await;

    assert!(result.is_err());

    Ok(())
}
