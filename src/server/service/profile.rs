use sea_orm::DatabaseConnection;

use crate::server::{
    data::{profile::ProfileRepository, user_match::MatchRepository},
    error::{auth::AuthError, AppError},
    model::profile::{Profile, UpdateProfileParam},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's own profile, creating an empty one if the row is missing
    pub async fn get_own(&self, user_id: i32) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        match repo.find_by_user_id(user_id).await? {
            Some(profile) => Ok(profile),
            None => Ok(repo.create(user_id, Default::default()).await?),
        }
    }

    /// Applies a partial update to the caller's profile
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<Profile, AppError> {
        self.get_own(user_id).await?;

        ProfileRepository::new(self.db)
            .update(user_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Gets another user's profile.
    ///
    /// Only users who share a match with the caller, in either direction, may see it.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The target's profile
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AuthError::AccessDenied)` - The caller and the target are not matched
    pub async fn get_other(&self, caller_id: i32, user_id: i32) -> Result<Profile, AppError> {
        let Some(profile) = ProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if caller_id != user_id
            && MatchRepository::new(self.db)
                .find_between(caller_id, user_id)
                .await?
                .is_none()
        {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("no match with user {}", user_id),
            )
            .into());
        }

        Ok(profile)
    }
}
