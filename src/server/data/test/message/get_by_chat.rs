use super::*;

/// Tests listing a chat's messages.
///
/// Verifies send order regardless of insertion order and that other chats'
/// messages are excluded.
///
/// Expected: Ok(Vec) ordered by sent_at ascending
#[tokio::test]
async fn lists_messages_in_send_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, bob, _, chat) = factory::helpers::create_match_with_chat(db).await?;
    let (carol, _, _, other_chat) = factory::helpers::create_match_with_chat(db).await?;

    let now = Utc::now();
    let later = factory::message::create_message_at(db, chat.id, alice.id, "second", now).await?;
    let earlier = factory::message::create_message_at(
        db,
        chat.id,
        bob.id,
        "first",
        now - Duration::minutes(5),
    )
    .await?;
    factory::message::create_message(db, other_chat.id, carol.id).await?;

    let messages = MessageRepository::new(db).get_by_chat(chat.id).await?;

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert_eq!(messages[0].sender.id, bob.id);

    Ok(())
}
