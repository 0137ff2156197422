//! Match factory for pairing two test users.

use chrono::{DateTime, Utc};
use entity::status::ProgressStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user_match = MatchFactory::new(&db, alice.id, bob.id)
///     .ratings(Some(5), None)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    user1_id: i32,
    user2_id: i32,
    status_user1: ProgressStatus,
    status_user2: ProgressStatus,
    matched_at: Option<DateTime<Utc>>,
    user1_rating: Option<i32>,
    user2_rating: Option<i32>,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with both sides pending and `matched_at` set to now.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user1_id` - First participant
    /// - `user2_id` - Second participant
    ///
    /// # Returns
    /// - `MatchFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user1_id: i32, user2_id: i32) -> Self {
        Self {
            db,
            user1_id,
            user2_id,
            status_user1: ProgressStatus::Pending,
            status_user2: ProgressStatus::Pending,
            matched_at: Some(Utc::now()),
            user1_rating: None,
            user2_rating: None,
        }
    }

    /// Sets both progress statuses.
    pub fn statuses(mut self, status_user1: ProgressStatus, status_user2: ProgressStatus) -> Self {
        self.status_user1 = status_user1;
        self.status_user2 = status_user2;
        self
    }

    /// Sets the instant the match was made.
    pub fn matched_at(mut self, matched_at: Option<DateTime<Utc>>) -> Self {
        self.matched_at = matched_at;
        self
    }

    /// Sets both ratings.
    ///
    /// # Arguments
    /// - `user1_rating` - Rating given by the first participant
    /// - `user2_rating` - Rating given by the second participant
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn ratings(mut self, user1_rating: Option<i32>, user2_rating: Option<i32>) -> Self {
        self.user1_rating = user1_rating;
        self.user2_rating = user2_rating;
        self
    }

    /// Builds and inserts the match entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_match::Model)` - Created match entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_match::Model, DbErr> {
        entity::user_match::ActiveModel {
            user1_id: ActiveValue::Set(self.user1_id),
            user2_id: ActiveValue::Set(self.user2_id),
            status_user1: ActiveValue::Set(self.status_user1),
            status_user2: ActiveValue::Set(self.status_user2),
            matched_at: ActiveValue::Set(self.matched_at),
            user1_rating: ActiveValue::Set(self.user1_rating),
            user2_rating: ActiveValue::Set(self.user2_rating),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a match with default values between two users.
pub async fn create_match(
    db: &DatabaseConnection,
    user1_id: i32,
    user2_id: i32,
) -> Result<entity::user_match::Model, DbErr> {
    MatchFactory::new(db, user1_id, user2_id).build().await
}
