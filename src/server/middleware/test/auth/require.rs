use super::*;

/// Tests a valid API token resolves its owner.
///
/// Expected: Ok(AuthenticatedUser) carrying the stored token's ID
#[tokio::test]
async fn resolves_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let plaintext = generate_token();
    let token = factory::expiring_token::TokenFactory::new(db, user.id)
        .key_hash(hash_token(&plaintext))
        .build()
        .await?;

    let state = state(db);
    let headers = authorization(&format!("Bearer {}", plaintext));
    let caller = AuthGuard::new(&state, &headers).require().await?;

    assert_eq!(caller.id(), user.id);
    assert_eq!(caller.token_id, Some(token.id));

    Ok(())
}

/// Tests missing credentials are rejected before any lookup.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = state(db);
    let headers = HeaderMap::new();
    let result = AuthGuard::new(&state, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));
}

/// Tests unknown, expired and revoked tokens are all reported as invalid.
///
/// Expected: Err(AuthError::InvalidToken) for each
#[tokio::test]
async fn rejects_unusable_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let expired = generate_token();
    factory::expiring_token::TokenFactory::new(db, user.id)
        .key_hash(hash_token(&expired))
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;
    let revoked = generate_token();
    factory::expiring_token::TokenFactory::new(db, user.id)
        .key_hash(hash_token(&revoked))
        .revoked(true)
        .build()
        .await?;

    let state = state(db);
    for token in [generate_token(), expired, revoked] {
        let headers = authorization(&format!("Bearer {}", token));
        let result = AuthGuard::new(&state, &headers).require().await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    Ok(())
}

/// Tests a JWT-shaped token is not sent to Auth0 when no tenant is configured.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn ignores_jwt_without_auth0() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = state(db);
    let headers = authorization("Bearer aaa.bbb.ccc");
    let result = AuthGuard::new(&state, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}
