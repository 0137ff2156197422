use super::*;

/// Tests lazily creating settings.
///
/// Verifies that a user without a settings row gets the defaults and that a
/// second call returns the same row.
///
/// Expected: Ok(Settings) with ghost mode off and the other flags on
#[tokio::test]
async fn creates_defaults_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = SettingsRepository::new(db);

    let settings = repo.get_or_create(user.id).await?;
    assert!(!settings.ghost_mode_enabled);
    assert!(settings.daily_reminders_enabled);
    assert!(settings.location_sharing_enabled);
    assert!(settings.spotmatch_notifications_enabled);

    let again = repo.get_or_create(user.id).await?;
    assert_eq!(settings, again);

    Ok(())
}

/// Tests returning existing settings.
///
/// Expected: Ok(Settings) reflecting the stored row
#[tokio::test]
async fn returns_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::user_mode_settings::SettingsFactory::new(db, user.id)
        .ghost_mode(true)
        .build()
        .await?;

    let settings = SettingsRepository::new(db).get_or_create(user.id).await?;

    assert!(settings.ghost_mode_enabled);

    Ok(())
}
