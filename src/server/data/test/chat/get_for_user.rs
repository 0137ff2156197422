use super::*;

/// Tests listing a user's chats.
///
/// Expected: only chats of the user's matches, newest first
#[tokio::test]
async fn lists_own_chats_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;
    let first_match = factory::user_match::create_match(db, alice.id, bob.id).await?;
    let second_match = factory::user_match::create_match(db, carol.id, alice.id).await?;
    let third_match = factory::user_match::create_match(db, bob.id, carol.id).await?;
    let first = factory::chat::create_chat(db, first_match.id).await?;
    let second = factory::chat::create_chat(db, second_match.id).await?;
    factory::chat::create_chat(db, third_match.id).await?;

    let chats = ChatRepository::new(db).get_for_user(alice.id).await?;

    let ids: Vec<i32> = chats.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
