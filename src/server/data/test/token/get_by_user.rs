use super::*;

/// Tests listing a user's tokens.
///
/// Verifies that only the user's own tokens are returned, newest first, and
/// that revoked tokens are still listed.
///
/// Expected: Ok(Vec) of two tokens, newest first
#[tokio::test]
async fn lists_own_tokens_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = TokenRepository::new(db);
    let first = repo
        .create(CreateTokenParam {
            user_id: user.id,
            key_hash: "d".repeat(64),
            name: "first".to_string(),
            expires_at: Utc::now() + Duration::days(1),
        })
        .await?;
    let second = repo
        .create(CreateTokenParam {
            user_id: user.id,
            key_hash: "e".repeat(64),
            name: "second".to_string(),
            expires_at: Utc::now() + Duration::days(1),
        })
        .await?;
    repo.revoke(first.id).await?;
    factory::expiring_token::create_token(db, other.id).await?;

    let tokens = repo.get_by_user(user.id).await?;

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].id, second.id);
    assert!(tokens[1].revoked);

    Ok(())
}
