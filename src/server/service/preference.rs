//! Preference catalog and the preferences users attach to themselves.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{preference::PreferenceRepository, user_preference::UserPreferenceRepository},
    error::AppError,
    model::preference::{validate_preference_name, Preference, UserPreference},
};

pub struct PreferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreferenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the catalog ordered by name
    pub async fn get_all(&self) -> Result<Vec<Preference>, AppError> {
        Ok(PreferenceRepository::new(self.db).get_all().await?)
    }

    /// Adds a preference to the catalog.
    ///
    /// # Arguments
    /// - `name` - Raw name, trimmed before storing
    ///
    /// # Returns
    /// - `Ok(Preference)` - The new preference
    /// - `Err(AppError::BadRequest)` - Blank, overlong or duplicate name
    pub async fn create(&self, name: &str) -> Result<Preference, AppError> {
        let name = validate_preference_name(name)?;

        let repo = PreferenceRepository::new(self.db);
        if repo.name_exists(&name).await? {
            return Err(AppError::BadRequest(
                "name: preference with this name already exists".to_string(),
            ));
        }

        Ok(repo.create(name).await?)
    }
}

pub struct UserPreferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPreferenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's preferences in the order they were attached
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<UserPreference>, AppError> {
        Ok(UserPreferenceRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Attaches a preference to the caller, returning the existing link if already attached.
    ///
    /// # Returns
    /// - `Ok(UserPreference)` - The link
    /// - `Err(AppError::BadRequest)` - The preference does not exist
    pub async fn add(&self, user_id: i32, preference_id: i32) -> Result<UserPreference, AppError> {
        UserPreferenceRepository::new(self.db)
            .get_or_create(user_id, preference_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "preference_id: invalid pk \"{}\" - object does not exist",
                    preference_id
                ))
            })
    }

    /// Detaches a preference from the caller
    pub async fn remove(&self, user_id: i32, preference_id: i32) -> Result<(), AppError> {
        let removed = UserPreferenceRepository::new(self.db)
            .delete(user_id, preference_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Preference not attached".to_string()));
        }

        Ok(())
    }
}
