//! Repository for the preferences attached to users.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::preference::{Preference, UserPreference};

/// Repository providing database operations for user preference links.
pub struct UserPreferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserPreferenceRepository<'a, C> {
    /// Creates a new UserPreferenceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserPreferenceRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches a preference to a user unless already attached.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `preference_id` - ID of an existing preference
    ///
    /// # Returns
    /// - `Ok(Some(UserPreference))` - The existing or new link
    /// - `Ok(None)` - The preference does not exist
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn get_or_create(
        &self,
        user_id: i32,
        preference_id: i32,
    ) -> Result<Option<UserPreference>, DbErr> {
        let Some(preference) = entity::prelude::Preference::find_by_id(preference_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let existing = entity::prelude::UserPreference::find()
            .filter(entity::user_preference::Column::UserId.eq(user_id))
            .filter(entity::user_preference::Column::PreferenceId.eq(preference_id))
            .one(self.db)
            .await?;

        let link = match existing {
            Some(link) => link,
            None => {
                entity::user_preference::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    preference_id: ActiveValue::Set(preference_id),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Some(UserPreference::from_entity(link, preference)))
    }

    /// Attaches several preferences to a fresh user.
    ///
    /// IDs must exist and must not already be attached.
    pub async fn create_many(&self, user_id: i32, preference_ids: &[i32]) -> Result<(), DbErr> {
        if preference_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let links = preference_ids
            .iter()
            .map(|&preference_id| entity::user_preference::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                preference_id: ActiveValue::Set(preference_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::UserPreference::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists a user's preferences in the order they were attached.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserPreference>, DbErr> {
        let rows = entity::prelude::UserPreference::find()
            .filter(entity::user_preference::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Preference)
            .order_by_asc(entity::user_preference::Column::CreatedAt)
            .order_by_asc(entity::user_preference::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, preference)| {
                preference.map(|preference| UserPreference::from_entity(link, preference))
            })
            .collect())
    }

    /// Groups the preferences of every user that has any, keyed by user ID.
    ///
    /// Each user's preferences are ordered by name.
    pub async fn get_all_grouped(&self) -> Result<HashMap<i32, Vec<Preference>>, DbErr> {
        let rows = entity::prelude::UserPreference::find()
            .find_also_related(entity::prelude::Preference)
            .order_by_asc(entity::preference::Column::Name)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<Preference>> = HashMap::new();
        for (link, preference) in rows {
            if let Some(preference) = preference {
                grouped
                    .entry(link.user_id)
                    .or_default()
                    .push(Preference::from_entity(preference));
            }
        }

        Ok(grouped)
    }

    /// Detaches a preference from a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - The preference was not attached
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, preference_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserPreference::delete_many()
            .filter(entity::user_preference::Column::UserId.eq(user_id))
            .filter(entity::user_preference::Column::PreferenceId.eq(preference_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
