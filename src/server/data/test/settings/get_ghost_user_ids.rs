use super::*;

/// Tests listing users in ghost mode.
///
/// Expected: only the user with ghost mode enabled is returned
#[tokio::test]
async fn lists_ghost_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ghost = factory::user::create_user(db).await?;
    let visible = factory::user::create_user(db).await?;
    factory::user_mode_settings::SettingsFactory::new(db, ghost.id)
        .ghost_mode(true)
        .build()
        .await?;
    factory::user_mode_settings::create_settings(db, visible.id).await?;

    let ids = SettingsRepository::new(db).get_ghost_user_ids().await?;

    assert_eq!(ids, vec![ghost.id]);

    Ok(())
}
