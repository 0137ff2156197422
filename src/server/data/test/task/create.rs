use super::*;

/// Tests creating a task and listing it.
///
/// Verifies that the task is stored for its owner and that listings are newest
/// first.
///
/// Expected: Ok(Task), listing returns the newest task first
#[tokio::test]
async fn creates_and_lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = TaskRepository::new(db);

    let older = repo
        .create(CreateTaskParam {
            user_id: user.id,
            description: "Gym".to_string(),
            scheduled_start_time: None,
            scheduled_end_time: None,
            is_free: false,
        })
        .await?;
    let newer = repo
        .create(CreateTaskParam {
            user_id: user.id,
            description: "Dentist".to_string(),
            scheduled_start_time: None,
            scheduled_end_time: None,
            is_free: true,
        })
        .await?;

    let tasks = repo.get_by_user(user.id).await?;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, newer.id);
    assert_eq!(tasks[1].id, older.id);
    assert!(tasks[0].is_free);

    Ok(())
}
