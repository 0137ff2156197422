use super::*;

/// Tests closing a chat.
///
/// Expected: Ok(Some(Chat)) with status closed
#[tokio::test]
async fn closes_chat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, chat) = factory::helpers::create_match_with_chat(db).await?;

    let updated = ChatRepository::new(db)
        .update_status(chat.id, ChatStatus::Closed)
        .await?
        .unwrap();

    assert_eq!(updated.status, ChatStatus::Closed);

    Ok(())
}

/// Tests deleting a chat with messages.
///
/// Expected: Ok(true), the chat is gone
#[tokio::test]
async fn deletes_chat_and_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _, _, chat) = factory::helpers::create_match_with_chat(db).await?;
    factory::message::create_message(db, chat.id, alice.id).await?;

    let repo = ChatRepository::new(db);

    assert!(repo.delete(chat.id).await?);
    assert!(repo.find_by_id(chat.id).await?.is_none());

    Ok(())
}
