use super::*;

/// Tests creating preferences and listing them.
///
/// Expected: preferences listed by name regardless of insertion order
#[tokio::test]
async fn lists_preferences_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PreferenceRepository::new(db);
    repo.create("Hiking".to_string()).await?;
    repo.create("Board games".to_string()).await?;
    repo.create("Cooking".to_string()).await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|p| p.name).collect();

    assert_eq!(names, vec!["Board games", "Cooking", "Hiking"]);
    assert!(repo.name_exists("Cooking").await?);
    assert!(!repo.name_exists("Chess").await?);

    Ok(())
}

/// Tests the unique name constraint.
///
/// Expected: Err(DbErr) on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::preference::create_preference_named(db, "Jazz").await?;

    let result = PreferenceRepository::new(db).create("Jazz".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
