use sea_orm::DatabaseConnection;

use crate::server::{
    data::settings::SettingsRepository,
    error::AppError,
    model::settings::{Settings, UpdateSettingsParam},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's settings, creating the defaults on first access
    pub async fn get(&self, user_id: i32) -> Result<Settings, AppError> {
        Ok(SettingsRepository::new(self.db).get_or_create(user_id).await?)
    }

    /// Applies a partial update to the caller's settings
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateSettingsParam,
    ) -> Result<Settings, AppError> {
        Ok(SettingsRepository::new(self.db).update(user_id, param).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn test_get_creates_defaults() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();

        let settings = SettingsService::new(db).get(user.id).await.unwrap();

        assert!(!settings.ghost_mode_enabled);
        assert!(settings.daily_reminders_enabled);
        assert!(settings.location_sharing_enabled);
        assert!(settings.spotmatch_notifications_enabled);
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();
        let service = SettingsService::new(db);

        service
            .update(
                user.id,
                UpdateSettingsParam {
                    ghost_mode_enabled: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let settings = service
            .update(
                user.id,
                UpdateSettingsParam {
                    daily_reminders_enabled: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(settings.ghost_mode_enabled);
        assert!(!settings.daily_reminders_enabled);
    }
}
