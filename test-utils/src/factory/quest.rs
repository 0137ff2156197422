//! Quest factory for creating quests attached to a match.

use chrono::{NaiveDate, Utc};
use entity::status::ProgressStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test quests with customizable fields.
pub struct QuestFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    location_name: String,
    activity: String,
    quest_date: NaiveDate,
    status_user1: ProgressStatus,
    status_user2: ProgressStatus,
    xp_reward: Option<i32>,
}

impl<'a> QuestFactory<'a> {
    /// Creates a new QuestFactory with default values.
    ///
    /// Defaults:
    /// - location_name: `"Place {id}"` where id is auto-incremented
    /// - activity: `"Coffee"`
    /// - quest_date: today
    /// - statuses: both pending
    /// - xp_reward: `Some(10)`
    /// - xp_awarded: set when both statuses are completed
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `match_id` - ID of the owning match
    ///
    /// # Returns
    /// - `QuestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, match_id: i32) -> Self {
        Self {
            db,
            match_id,
            location_name: format!("Place {}", next_id()),
            activity: "Coffee".to_string(),
            quest_date: Utc::now().date_naive(),
            status_user1: ProgressStatus::Pending,
            status_user2: ProgressStatus::Pending,
            xp_reward: Some(10),
        }
    }

    /// Sets the location name.
    pub fn location_name(mut self, location_name: impl Into<String>) -> Self {
        self.location_name = location_name.into();
        self
    }

    /// Sets the quest date.
    pub fn quest_date(mut self, quest_date: NaiveDate) -> Self {
        self.quest_date = quest_date;
        self
    }

    /// Sets both progress statuses.
    pub fn statuses(mut self, status_user1: ProgressStatus, status_user2: ProgressStatus) -> Self {
        self.status_user1 = status_user1;
        self.status_user2 = status_user2;
        self
    }

    /// Sets the XP reward.
    pub fn xp_reward(mut self, xp_reward: Option<i32>) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    /// Builds and inserts the quest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quest::Model)` - Created quest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quest::Model, DbErr> {
        let now = Utc::now();
        let completed = self.status_user1 == ProgressStatus::Completed
            && self.status_user2 == ProgressStatus::Completed;
        entity::quest::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            location_name: ActiveValue::Set(self.location_name),
            hint_user1: ActiveValue::Set("Look for the blue door".to_string()),
            hint_user2: ActiveValue::Set("Ask for the corner table".to_string()),
            activity: ActiveValue::Set(self.activity),
            quest_date: ActiveValue::Set(self.quest_date),
            location_latitude: ActiveValue::Set(None),
            location_longitude: ActiveValue::Set(None),
            status_user1: ActiveValue::Set(self.status_user1),
            status_user2: ActiveValue::Set(self.status_user2),
            xp_reward: ActiveValue::Set(self.xp_reward),
            xp_awarded: ActiveValue::Set(completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a quest with default values for the given match.
pub async fn create_quest(
    db: &DatabaseConnection,
    match_id: i32,
) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db, match_id).build().await
}
