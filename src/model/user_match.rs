use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{status::ProgressStatusDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub user1: UserSummaryDto,
    pub user2: UserSummaryDto,
    pub status_user1: ProgressStatusDto,
    pub status_user2: ProgressStatusDto,
    pub matched_at: Option<DateTime<Utc>>,
    pub user1_rating: Option<i32>,
    pub user2_rating: Option<i32>,
}

/// Match reference embedded in quests and chats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchRefDto {
    pub id: i32,
    pub user1_id: i32,
    pub user2_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMatchDto {
    pub user2_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMatchDto {
    pub status_user1: Option<ProgressStatusDto>,
    pub status_user2: Option<ProgressStatusDto>,
    pub user1_rating: Option<i32>,
    pub user2_rating: Option<i32>,
}

/// Rating body. Kept untyped so a non-integer value is reported as a 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RateMatchDto {
    #[schema(value_type = Option<i32>)]
    pub rating: Option<serde_json::Value>,
}
