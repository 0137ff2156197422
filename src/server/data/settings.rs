//! Mode settings repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::settings::{Settings, UpdateSettingsParam};

pub struct SettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the default settings row for a user.
    ///
    /// # Returns
    /// - `Ok(Settings)` - Ghost mode off, every other flag on
    /// - `Err(DbErr)` - Database error, including an existing row for the user
    pub async fn create(&self, user_id: i32) -> Result<Settings, DbErr> {
        let entity = entity::user_mode_settings::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            ghost_mode_enabled: ActiveValue::Set(false),
            daily_reminders_enabled: ActiveValue::Set(true),
            location_sharing_enabled: ActiveValue::Set(true),
            spotmatch_notifications_enabled: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Settings::from_entity(entity))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Settings>, DbErr> {
        let entity = entity::prelude::UserModeSettings::find()
            .filter(entity::user_mode_settings::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Settings::from_entity))
    }

    /// Returns the user's settings, creating the default row when missing.
    ///
    /// # Returns
    /// - `Ok(Settings)` - Existing or newly created settings
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn get_or_create(&self, user_id: i32) -> Result<Settings, DbErr> {
        match self.find_by_user_id(user_id).await? {
            Some(settings) => Ok(settings),
            None => self.create(user_id).await,
        }
    }

    /// Applies a partial update, creating the row first when missing.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the settings
    /// - `param` - Flags to change; `None` leaves a flag as is
    ///
    /// # Returns
    /// - `Ok(Settings)` - The updated settings
    /// - `Err(DbErr)` - Database error during query, insert or update
    pub async fn update(&self, user_id: i32, param: UpdateSettingsParam) -> Result<Settings, DbErr> {
        self.get_or_create(user_id).await?;

        let Some(entity) = entity::prelude::UserModeSettings::find()
            .filter(entity::user_mode_settings::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!("settings of user {}", user_id)));
        };

        let mut active: entity::user_mode_settings::ActiveModel = entity.into();
        if let Some(enabled) = param.ghost_mode_enabled {
            active.ghost_mode_enabled = ActiveValue::Set(enabled);
        }
        if let Some(enabled) = param.daily_reminders_enabled {
            active.daily_reminders_enabled = ActiveValue::Set(enabled);
        }
        if let Some(enabled) = param.location_sharing_enabled {
            active.location_sharing_enabled = ActiveValue::Set(enabled);
        }
        if let Some(enabled) = param.spotmatch_notifications_enabled {
            active.spotmatch_notifications_enabled = ActiveValue::Set(enabled);
        }

        let entity = active.update(self.db).await?;

        Ok(Settings::from_entity(entity))
    }

    /// IDs of users who turned ghost mode on.
    pub async fn get_ghost_user_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserModeSettings::find()
            .select_only()
            .column(entity::user_mode_settings::Column::UserId)
            .filter(entity::user_mode_settings::Column::GhostModeEnabled.eq(true))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
