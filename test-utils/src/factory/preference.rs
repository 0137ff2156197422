//! Preference factory for creating catalog entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a preference with a generated unique name.
pub async fn create_preference(db: &DatabaseConnection) -> Result<entity::preference::Model, DbErr> {
    create_preference_named(db, format!("preference{}", next_id())).await
}

/// Creates a preference with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Unique preference name
///
/// # Returns
/// - `Ok(entity::preference::Model)` - Created preference entity
/// - `Err(DbErr)` - Database error during insert, including a duplicate name
pub async fn create_preference_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::preference::Model, DbErr> {
    entity::preference::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
