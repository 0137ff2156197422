use super::*;

/// Tests crediting XP to several profiles.
///
/// Verifies that the amount is added to the existing total of each listed
/// profile and other profiles are untouched.
///
/// Expected: listed profiles gain the amount
#[tokio::test]
async fn adds_xp_to_listed_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;
    factory::user_profile::ProfileFactory::new(db, alice.id)
        .total_xp(20)
        .build()
        .await?;
    factory::user_profile::create_profile(db, bob.id).await?;
    factory::user_profile::create_profile(db, carol.id).await?;

    let repo = ProfileRepository::new(db);
    repo.add_xp(&[alice.id, bob.id], 10).await?;

    assert_eq!(repo.find_by_user_id(alice.id).await?.unwrap().total_xp, 30);
    assert_eq!(repo.find_by_user_id(bob.id).await?.unwrap().total_xp, 10);
    assert_eq!(repo.find_by_user_id(carol.id).await?.unwrap().total_xp, 0);

    Ok(())
}
