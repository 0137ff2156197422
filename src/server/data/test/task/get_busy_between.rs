use super::*;

/// Tests selecting busy tasks overlapping a day.
///
/// Verifies that free tasks, unscheduled tasks, tasks on other days and tasks of
/// other users are left out, while a task straddling midnight is included.
///
/// Expected: Ok(Vec) with the two overlapping busy tasks
#[tokio::test]
async fn selects_overlapping_busy_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Task)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;

    let day = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    let next_day = day + Duration::days(1);

    let morning = factory::task::TaskFactory::new(db, alice.id)
        .scheduled(day + Duration::hours(9), day + Duration::hours(10))
        .build()
        .await?;
    let overnight = factory::task::TaskFactory::new(db, bob.id)
        .scheduled(day - Duration::hours(2), day + Duration::hours(8))
        .build()
        .await?;
    factory::task::TaskFactory::new(db, alice.id)
        .scheduled(day + Duration::hours(12), day + Duration::hours(13))
        .free(true)
        .build()
        .await?;
    factory::task::TaskFactory::new(db, alice.id)
        .scheduled(next_day + Duration::hours(9), next_day + Duration::hours(10))
        .build()
        .await?;
    factory::task::create_task(db, alice.id).await?;
    factory::task::TaskFactory::new(db, carol.id)
        .scheduled(day + Duration::hours(9), day + Duration::hours(10))
        .build()
        .await?;

    let tasks = TaskRepository::new(db)
        .get_busy_between(&[alice.id, bob.id], day, next_day)
        .await?;

    let ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![overnight.id, morning.id]);

    Ok(())
}
