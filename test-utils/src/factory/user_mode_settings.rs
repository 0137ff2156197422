//! Settings factory for creating the mode toggles of a test user.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test settings rows.
pub struct SettingsFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    ghost_mode_enabled: bool,
}

impl<'a> SettingsFactory<'a> {
    /// Creates a new SettingsFactory with the same defaults registration uses.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user that owns the settings
    ///
    /// # Returns
    /// - `SettingsFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            ghost_mode_enabled: false,
        }
    }

    /// Sets whether ghost mode hides the user from matching.
    pub fn ghost_mode(mut self, enabled: bool) -> Self {
        self.ghost_mode_enabled = enabled;
        self
    }

    /// Builds and inserts the settings entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_mode_settings::Model)` - Created settings entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_mode_settings::Model, DbErr> {
        entity::user_mode_settings::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            ghost_mode_enabled: ActiveValue::Set(self.ghost_mode_enabled),
            daily_reminders_enabled: ActiveValue::Set(true),
            location_sharing_enabled: ActiveValue::Set(true),
            spotmatch_notifications_enabled: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with default values for the given user.
pub async fn create_settings(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_mode_settings::Model, DbErr> {
    SettingsFactory::new(db, user_id).build().await
}
