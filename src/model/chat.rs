use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{status::ChatStatusDto, user_match::MatchRefDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatDto {
    pub id: i32,
    #[serde(rename = "match")]
    pub user_match: MatchRefDto,
    pub status: ChatStatusDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateChatDto {
    pub match_id: i32,
    pub status: Option<ChatStatusDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateChatDto {
    pub status: Option<ChatStatusDto>,
}
