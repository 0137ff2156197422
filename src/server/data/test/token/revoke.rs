use super::*;

/// Tests revoking a token.
///
/// Verifies that the revoked flag is set and the token can no longer be found
/// by digest.
///
/// Expected: Ok(true), then lookups return None
#[tokio::test]
async fn revokes_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::expiring_token::TokenFactory::new(db, user.id)
        .key_hash("c".repeat(64))
        .build()
        .await?;

    let repo = TokenRepository::new(db);

    assert!(repo.revoke(token.id).await?);
    assert!(repo.find_unrevoked_by_hash(&"c".repeat(64)).await?.is_none());

    Ok(())
}

/// Tests revoking an unknown token.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TokenRepository::new(db).revoke(42).await?);

    Ok(())
}
