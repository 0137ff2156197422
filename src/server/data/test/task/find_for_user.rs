use super::*;

/// Tests that task lookups are scoped to the owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user
#[tokio::test]
async fn scopes_lookup_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let task = factory::task::create_task(db, owner.id).await?;

    let repo = TaskRepository::new(db);

    assert!(repo.find_for_user(task.id, owner.id).await?.is_some());
    assert!(repo.find_for_user(task.id, stranger.id).await?.is_none());

    Ok(())
}

/// Tests deleting a task.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let task = factory::task::create_task(db, owner.id).await?;

    let repo = TaskRepository::new(db);

    assert!(repo.delete(task.id).await?);
    assert!(!repo.delete(task.id).await?);

    Ok(())
}
