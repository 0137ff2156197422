//! Profile factory for creating the one-to-one profile row of a test user.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileFactory::new(&db, user.id)
///     .date_of_birth(NaiveDate::from_ymd_opt(1995, 4, 2).unwrap())
///     .home(51.5, -0.12)
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    full_name: String,
    date_of_birth: Option<NaiveDate>,
    total_xp: i32,
    is_matched: bool,
    home_latitude: Option<f64>,
    home_longitude: Option<f64>,
    external_id: String,
    is_service_account: bool,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults to an unmatched, unverified profile with no birth date, no home
    /// location and zero XP.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user that owns the profile
    ///
    /// # Returns
    /// - `ProfileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            full_name: format!("Test User {}", user_id),
            date_of_birth: None,
            total_xp: 0,
            is_matched: false,
            home_latitude: None,
            home_longitude: None,
            external_id: String::new(),
            is_service_account: false,
        }
    }

    /// Sets the date of birth.
    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the accumulated XP.
    pub fn total_xp(mut self, total_xp: i32) -> Self {
        self.total_xp = total_xp;
        self
    }

    /// Marks the profile as already matched.
    pub fn matched(mut self, is_matched: bool) -> Self {
        self.is_matched = is_matched;
        self
    }

    /// Sets the home coordinates.
    ///
    /// # Arguments
    /// - `latitude` - Home latitude in degrees
    /// - `longitude` - Home longitude in degrees
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn home(mut self, latitude: f64, longitude: f64) -> Self {
        self.home_latitude = Some(latitude);
        self.home_longitude = Some(longitude);
        self
    }

    /// Sets the external identity provider subject.
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Marks the profile as belonging to a machine client.
    pub fn service_account(mut self, is_service_account: bool) -> Self {
        self.is_service_account = is_service_account;
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        let now = Utc::now();
        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            full_name: ActiveValue::Set(self.full_name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            nickname: ActiveValue::Set(String::new()),
            teaser_description: ActiveValue::Set(String::new()),
            profile_photo_url: ActiveValue::Set(String::new()),
            verification_video_url: ActiveValue::Set(String::new()),
            is_verified: ActiveValue::Set(false),
            total_xp: ActiveValue::Set(self.total_xp),
            is_matched: ActiveValue::Set(self.is_matched),
            home_latitude: ActiveValue::Set(self.home_latitude),
            home_longitude: ActiveValue::Set(self.home_longitude),
            external_id: ActiveValue::Set(self.external_id),
            is_service_account: ActiveValue::Set(self.is_service_account),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values for the given user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the owning user
///
/// # Returns
/// - `Ok(entity::user_profile::Model)` - Created profile entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_profile::Model, DbErr> {
    ProfileFactory::new(db, user_id).build().await
}
