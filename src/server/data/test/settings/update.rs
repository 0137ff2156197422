use super::*;

/// Tests a partial settings update.
///
/// Verifies that only the supplied flag changes.
///
/// Expected: Ok(Settings) with daily reminders off and everything else default
#[tokio::test]
async fn updates_supplied_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_account(db).await?;

    let settings = SettingsRepository::new(db)
        .update(
            user.id,
            UpdateSettingsParam {
                daily_reminders_enabled: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!settings.daily_reminders_enabled);
    assert!(!settings.ghost_mode_enabled);
    assert!(settings.location_sharing_enabled);

    Ok(())
}

/// Tests updating settings of a user without a settings row.
///
/// Expected: the row is created and the update applied
#[tokio::test]
async fn creates_row_before_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let settings = SettingsRepository::new(db)
        .update(
            user.id,
            UpdateSettingsParam {
                ghost_mode_enabled: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(settings.ghost_mode_enabled);
    assert_eq!(settings.user_id, user.id);

    Ok(())
}
