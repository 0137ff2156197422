//! Preference catalog repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::preference::Preference;

pub struct PreferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a preference.
    ///
    /// # Returns
    /// - `Ok(Preference)` - The created preference
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, name: String) -> Result<Preference, DbErr> {
        let entity = entity::preference::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Preference::from_entity(entity))
    }

    /// Lists every preference ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Preference>, DbErr> {
        let entities = entity::prelude::Preference::find()
            .order_by_asc(entity::preference::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Preference::from_entity).collect())
    }

    pub async fn find_by_id(&self, preference_id: i32) -> Result<Option<Preference>, DbErr> {
        let entity = entity::prelude::Preference::find_by_id(preference_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Preference::from_entity))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Preference::find()
            .filter(entity::preference::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns which of the given IDs exist.
    ///
    /// # Arguments
    /// - `preference_ids` - IDs to check
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The subset of IDs present in the catalog
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_existing_ids(&self, preference_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if preference_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Preference::find()
            .select_only()
            .column(entity::preference::Column::Id)
            .filter(entity::preference::Column::Id.is_in(preference_ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
