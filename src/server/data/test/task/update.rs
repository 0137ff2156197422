use super::*;

/// Tests a partial task update.
///
/// Expected: only the description and free flag change
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let task = factory::task::TaskFactory::new(db, owner.id)
        .scheduled(start, start + Duration::hours(1))
        .build()
        .await?;

    let updated = TaskRepository::new(db)
        .update(
            task.id,
            UpdateTaskParam {
                description: Some("Lunch".to_string()),
                is_free: Some(true),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, "Lunch");
    assert!(updated.is_free);
    assert_eq!(updated.scheduled_start_time, Some(start));

    Ok(())
}
