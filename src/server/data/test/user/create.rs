use super::*;

/// Tests creating an account row.
///
/// Verifies that the repository stores the supplied identifiers and marks the
/// new user active.
///
/// Expected: Ok(User) with is_active true
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: Some("alice@example.com".to_string()),
            username: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            provider: "email".to_string(),
            ..Default::default()
        })
        .await?;

    assert!(user.is_active);
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.username, "alice@example.com");
    assert!(repo.find_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Verifies that inserting a second user with the same email fails at the
/// database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            email: Some("taken@example.com".to_string()),
            username: "other".to_string(),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
