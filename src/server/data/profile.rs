//! Profile data repository.
//!
//! Profiles are keyed by their owner's user ID. Every read joins the owning user row so
//! the domain model carries username, email and activation state.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use sea_orm::sea_query::ExprTrait;

use crate::server::model::profile::{CreateProfileParam, Profile, UpdateProfileParam};

/// Repository providing database operations for user profiles.
pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the profile row for a user.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the profile
    /// - `param` - Initial profile values
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile joined with its user
    /// - `Err(DbErr)` - Database error, or the user row does not exist
    pub async fn create(&self, user_id: i32, param: CreateProfileParam) -> Result<Profile, DbErr> {
        let now = Utc::now();
        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            full_name: ActiveValue::Set(param.full_name),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            nickname: ActiveValue::Set(param.nickname),
            teaser_description: ActiveValue::Set(param.teaser_description),
            profile_photo_url: ActiveValue::Set(param.profile_photo_url),
            verification_video_url: ActiveValue::Set(param.verification_video_url),
            is_verified: ActiveValue::Set(false),
            total_xp: ActiveValue::Set(0),
            is_matched: ActiveValue::Set(false),
            home_latitude: ActiveValue::Set(param.home_latitude),
            home_longitude: ActiveValue::Set(param.home_longitude),
            external_id: ActiveValue::Set(param.external_id),
            is_service_account: ActiveValue::Set(param.is_service_account),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {} for new profile", user_id)))
    }

    /// Finds the profile of a user.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found
    /// - `Ok(None)` - The user has no profile or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Profile>, DbErr> {
        let row = entity::prelude::UserProfile::find_by_id(user_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(profile, user)| user.map(|user| Profile::from_entities(user, profile))))
    }

    /// Finds the profile linked to an identity provider subject.
    ///
    /// # Arguments
    /// - `external_id` - The `sub` claim of the identity provider token
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found
    /// - `Ok(None)` - No profile carries that subject
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Profile>, DbErr> {
        let row = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::ExternalId.eq(external_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(profile, user)| user.map(|user| Profile::from_entities(user, profile))))
    }

    /// Lists every profile with its user, ordered by user ID.
    ///
    /// Used by the matching engine, which embeds the whole population.
    pub async fn get_all(&self) -> Result<Vec<Profile>, DbErr> {
        let rows = entity::prelude::UserProfile::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::user_profile::Column::UserId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(profile, user)| user.map(|user| Profile::from_entities(user, profile)))
            .collect())
    }

    /// Applies a partial update.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the profile
    /// - `param` - Fields to change; `None` leaves a field as is
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The updated profile
    /// - `Ok(None)` - The user has no profile
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<Profile>, DbErr> {
        let Some(profile) = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_profile::ActiveModel = profile.into();

        if let Some(full_name) = param.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(nickname) = param.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(teaser_description) = param.teaser_description {
            active.teaser_description = ActiveValue::Set(teaser_description);
        }
        if let Some(url) = param.profile_photo_url {
            active.profile_photo_url = ActiveValue::Set(url);
        }
        if let Some(url) = param.verification_video_url {
            active.verification_video_url = ActiveValue::Set(url);
        }
        if let Some(is_matched) = param.is_matched {
            active.is_matched = ActiveValue::Set(is_matched);
        }
        if let Some(date_of_birth) = param.date_of_birth {
            active.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }
        if let Some(latitude) = param.home_latitude {
            active.home_latitude = ActiveValue::Set(Some(latitude));
        }
        if let Some(longitude) = param.home_longitude {
            active.home_longitude = ActiveValue::Set(Some(longitude));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_user_id(user_id).await
    }

    /// Adds XP to several profiles in one statement.
    ///
    /// # Arguments
    /// - `user_ids` - Profiles to credit
    /// - `amount` - XP to add to each
    ///
    /// # Returns
    /// - `Ok(())` - XP added (returns early for an empty slice or zero amount)
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_xp(&self, user_ids: &[i32], amount: i32) -> Result<(), DbErr> {
        if user_ids.is_empty() || amount == 0 {
            return Ok(());
        }

        entity::prelude::UserProfile::update_many()
            .filter(entity::user_profile::Column::UserId.is_in(user_ids.to_vec()))
            .col_expr(
                entity::user_profile::Column::TotalXp,
                sea_orm::sea_query::Expr::col(entity::user_profile::Column::TotalXp).add(amount),
            )
            .col_expr(
                entity::user_profile::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the matched flag on several profiles.
    pub async fn set_matched(&self, user_ids: &[i32], is_matched: bool) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::UserProfile::update_many()
            .filter(entity::user_profile::Column::UserId.is_in(user_ids.to_vec()))
            .col_expr(
                entity::user_profile::Column::IsMatched,
                sea_orm::sea_query::Expr::value(is_matched),
            )
            .col_expr(
                entity::user_profile::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records the identity provider subject of a profile.
    pub async fn set_external_identity(
        &self,
        user_id: i32,
        external_id: String,
        is_service_account: bool,
    ) -> Result<(), DbErr> {
        entity::prelude::UserProfile::update_many()
            .filter(entity::user_profile::Column::UserId.eq(user_id))
            .col_expr(
                entity::user_profile::Column::ExternalId,
                sea_orm::sea_query::Expr::value(external_id),
            )
            .col_expr(
                entity::user_profile::Column::IsServiceAccount,
                sea_orm::sea_query::Expr::value(is_service_account),
            )
            .col_expr(
                entity::user_profile::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
