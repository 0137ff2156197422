use super::*;

/// Tests deleting a match.
///
/// Verifies that the chat, its messages and the quests of the match are
/// removed along with it.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_match_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _bob, user_match, chat) = factory::helpers::create_match_with_chat(db).await?;
    let message = factory::message::create_message(db, chat.id, alice.id).await?;
    let quest = factory::quest::create_quest(db, user_match.id).await?;

    assert!(MatchRepository::new(db).delete(user_match.id).await?);

    use sea_orm::EntityTrait;
    assert!(entity::prelude::Chat::find_by_id(chat.id).one(db).await?.is_none());
    assert!(entity::prelude::Message::find_by_id(message.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Quest::find_by_id(quest.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown match.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!MatchRepository::new(db).delete(5).await?);

    Ok(())
}
