use super::*;

/// Tests grouping preferences by user.
///
/// Expected: each user maps to their preferences ordered by name
#[tokio::test]
async fn groups_preferences_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let yoga = factory::preference::create_preference_named(db, "Yoga").await?;
    let art = factory::preference::create_preference_named(db, "Art").await?;
    factory::user_preference::create_user_preference(db, alice.id, yoga.id).await?;
    factory::user_preference::create_user_preference(db, alice.id, art.id).await?;
    factory::user_preference::create_user_preference(db, bob.id, yoga.id).await?;

    let grouped = UserPreferenceRepository::new(db).get_all_grouped().await?;

    let alice_names: Vec<&str> = grouped[&alice.id].iter().map(|p| p.name.as_str()).collect();
    assert_eq!(alice_names, vec!["Art", "Yoga"]);
    assert_eq!(grouped[&bob.id].len(), 1);

    Ok(())
}
