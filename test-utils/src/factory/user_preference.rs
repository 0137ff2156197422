//! Factory for linking users to preferences.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a user to a preference.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user
/// - `preference_id` - ID of the preference
///
/// # Returns
/// - `Ok(entity::user_preference::Model)` - Created link entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_preference(
    db: &DatabaseConnection,
    user_id: i32,
    preference_id: i32,
) -> Result<entity::user_preference::Model, DbErr> {
    entity::user_preference::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        preference_id: ActiveValue::Set(preference_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
