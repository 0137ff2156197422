use super::*;

/// Tests storing a message.
///
/// Verifies that the sender summary is attached to the stored message.
///
/// Expected: Ok(Message)
#[tokio::test]
async fn creates_message_with_sender() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _, _, chat) = factory::helpers::create_match_with_chat(db).await?;

    let message = MessageRepository::new(db)
        .create(CreateMessageParam::new(chat.id, alice.id, "Hello".to_string()).unwrap())
        .await?;

    assert_eq!(message.chat_id, chat.id);
    assert_eq!(message.sender.id, alice.id);
    assert_eq!(message.sender.email, alice.email);
    assert_eq!(message.content, "Hello");

    Ok(())
}

/// Tests deleting a message.
///
/// Expected: Ok(true), then lookups return None
#[tokio::test]
async fn deletes_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _, _, chat) = factory::helpers::create_match_with_chat(db).await?;
    let message = factory::message::create_message(db, chat.id, alice.id).await?;

    let repo = MessageRepository::new(db);

    assert!(repo.delete(message.id).await?);
    assert!(repo.find_by_id(message.id).await?.is_none());

    Ok(())
}
