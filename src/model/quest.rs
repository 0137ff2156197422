use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{status::ProgressStatusDto, user_match::MatchRefDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestDto {
    pub id: i32,
    #[serde(rename = "match")]
    pub user_match: MatchRefDto,
    pub location_name: String,
    pub activity: String,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub hint_user1: String,
    pub hint_user2: String,
    pub quest_date: NaiveDate,
    pub status_user1: ProgressStatusDto,
    pub status_user2: ProgressStatusDto,
    pub xp_reward: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestDto {
    pub match_id: i32,
    pub location_name: String,
    pub activity: String,
    pub quest_date: NaiveDate,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub hint_user1: Option<String>,
    pub hint_user2: Option<String>,
    pub status_user1: Option<ProgressStatusDto>,
    pub status_user2: Option<ProgressStatusDto>,
    pub xp_reward: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateQuestDto {
    pub location_name: Option<String>,
    pub activity: Option<String>,
    pub quest_date: Option<NaiveDate>,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub hint_user1: Option<String>,
    pub hint_user2: Option<String>,
    pub status_user1: Option<ProgressStatusDto>,
    pub status_user2: Option<ProgressStatusDto>,
    pub xp_reward: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HintDto {
    pub hint: Option<String>,
}

/// Result of generating quests for a match.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedQuestsDto {
    /// Start of the shared free slot, `HH:MM`.
    pub slot_start: String,
    /// End of the shared free slot, `HH:MM`.
    pub slot_end: String,
    pub quests: Vec<QuestDto>,
}
