pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_expiring_token_table;
mod m20260901_000003_create_user_profile_table;
mod m20260901_000004_create_user_mode_settings_table;
mod m20260901_000005_create_task_table;
mod m20260902_000006_create_preference_table;
mod m20260902_000007_create_user_preference_table;
mod m20260903_000008_create_match_table;
mod m20260903_000009_create_quest_table;
mod m20260904_000010_create_chat_table;
mod m20260904_000011_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_expiring_token_table::Migration),
            Box::new(m20260901_000003_create_user_profile_table::Migration),
            Box::new(m20260901_000004_create_user_mode_settings_table::Migration),
            Box::new(m20260901_000005_create_task_table::Migration),
            Box::new(m20260902_000006_create_preference_table::Migration),
            Box::new(m20260902_000007_create_user_preference_table::Migration),
            Box::new(m20260903_000008_create_match_table::Migration),
            Box::new(m20260903_000009_create_quest_table::Migration),
            Box::new(m20260904_000010_create_chat_table::Migration),
            Box::new(m20260904_000011_create_message_table::Migration),
        ]
    }
}
