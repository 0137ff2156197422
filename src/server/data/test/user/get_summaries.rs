use super::*;

/// Tests loading user summaries in bulk.
///
/// Verifies that known IDs map to their email and unknown IDs are left out.
///
/// Expected: Ok(HashMap) with two entries
#[tokio::test]
async fn loads_known_users_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user_with_email(db, "alice@example.com").await?;
    let bob = factory::user::create_user(db).await?;

    let summaries = UserRepository::new(db)
        .get_summaries(&[alice.id, bob.id, alice.id, 9999])
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(
        summaries[&alice.id].email.as_deref(),
        Some("alice@example.com")
    );
    assert!(!summaries.contains_key(&9999));

    Ok(())
}

/// Tests loading summaries for an empty ID list.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let summaries = UserRepository::new(db).get_summaries(&[]).await?;

    assert!(summaries.is_empty());

    Ok(())
}
