use super::*;

/// Tests finding a token by its digest.
///
/// Verifies that a stored token is returned even when expired, leaving the
/// expiry decision to the caller.
///
/// Expected: Ok(Some(Token))
#[tokio::test]
async fn finds_token_regardless_of_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = TokenRepository::new(db);
    let token = repo
        .create(CreateTokenParam {
            user_id: user.id,
            key_hash: "a".repeat(64),
            name: String::new(),
            expires_at: Utc::now() - Duration::days(1),
        })
        .await?;

    let found = repo.find_unrevoked_by_hash(&"a".repeat(64)).await?;

    assert_eq!(found.map(|t| t.id), Some(token.id));

    Ok(())
}

/// Tests that revoked tokens are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_revoked_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::expiring_token::TokenFactory::new(db, user.id)
        .key_hash("b".repeat(64))
        .revoked(true)
        .build()
        .await?;

    let found = TokenRepository::new(db)
        .find_unrevoked_by_hash(&"b".repeat(64))
        .await?;

    assert!(found.is_none());

    Ok(())
}
