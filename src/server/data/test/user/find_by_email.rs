use super::*;

/// Tests finding a user by email.
///
/// Verifies that the stored address is matched exactly and that existence
/// checks agree with the lookup.
///
/// Expected: Ok(Some(User)) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "bob@example.com").await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("bob@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.email_exists("bob@example.com").await?);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}

/// Tests finding a user by phone number.
///
/// Verifies that users registered without email can be found by phone.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_by_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .no_email()
        .phone_number("+15550100")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_phone("+15550100").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.phone_exists("+15550100").await?);
    assert!(!repo.phone_exists("+15550199").await?);

    Ok(())
}
