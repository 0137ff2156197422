//! Quest domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::status::ProgressStatus;

use crate::{
    model::quest::{CreateQuestDto, GeneratedQuestsDto, QuestDto, UpdateQuestDto},
    server::{engine::quest::format_minutes, error::AppError, model::user_match::MatchRef},
};

/// Longest hint a participant may leave.
pub const MAX_HINT_LENGTH: usize = 255;

/// Largest XP reward a quest may carry.
pub const MAX_XP_REWARD: i32 = 100;

/// A date activity at a place, attached to a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: i32,
    pub user_match: MatchRef,
    pub location_name: String,
    pub activity: String,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub hint_user1: String,
    pub hint_user2: String,
    pub quest_date: NaiveDate,
    pub status_user1: ProgressStatus,
    pub status_user2: ProgressStatus,
    pub xp_reward: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quest {
    pub fn into_dto(self) -> QuestDto {
        QuestDto {
            id: self.id,
            user_match: self.user_match.into_dto(),
            location_name: self.location_name,
            activity: self.activity,
            location_latitude: self.location_latitude,
            location_longitude: self.location_longitude,
            hint_user1: self.hint_user1,
            hint_user2: self.hint_user2,
            quest_date: self.quest_date,
            status_user1: self.status_user1.into(),
            status_user2: self.status_user2.into(),
            xp_reward: self.xp_reward,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a quest entity and its match to the domain model.
    pub fn from_entity(entity: entity::quest::Model, user_match: MatchRef) -> Self {
        Self {
            id: entity.id,
            user_match,
            location_name: entity.location_name,
            activity: entity.activity,
            location_latitude: entity.location_latitude,
            location_longitude: entity.location_longitude,
            hint_user1: entity.hint_user1,
            hint_user2: entity.hint_user2,
            quest_date: entity.quest_date,
            status_user1: entity.status_user1,
            status_user2: entity.status_user2,
            xp_reward: entity.xp_reward,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether both participants have completed the quest.
    pub fn is_completed(&self) -> bool {
        self.status_user1 == ProgressStatus::Completed
            && self.status_user2 == ProgressStatus::Completed
    }
}

/// Quests created for a match together with the free slot they were planned into.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuests {
    /// Slot start in minutes after midnight.
    pub slot_start: i64,
    /// Slot end in minutes after midnight.
    pub slot_end: i64,
    pub quests: Vec<Quest>,
}

impl GeneratedQuests {
    pub fn into_dto(self) -> GeneratedQuestsDto {
        GeneratedQuestsDto {
            slot_start: format_minutes(self.slot_start),
            slot_end: format_minutes(self.slot_end),
            quests: self.quests.into_iter().map(Quest::into_dto).collect(),
        }
    }
}

/// Parameters for inserting a quest.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuestParam {
    pub match_id: i32,
    pub location_name: String,
    pub activity: String,
    pub quest_date: NaiveDate,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub hint_user1: String,
    pub hint_user2: String,
    pub status_user1: ProgressStatus,
    pub status_user2: ProgressStatus,
    pub xp_reward: Option<i32>,
}

impl CreateQuestParam {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateQuestParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank location or activity, or an overlong hint
    pub fn from_dto(dto: CreateQuestDto) -> Result<Self, AppError> {
        Ok(Self {
            match_id: dto.match_id,
            location_name: validate_not_blank("location_name", dto.location_name)?,
            activity: validate_not_blank("activity", dto.activity)?,
            quest_date: dto.quest_date,
            location_latitude: dto.location_latitude,
            location_longitude: dto.location_longitude,
            hint_user1: validate_hint_length(dto.hint_user1.unwrap_or_default())?,
            hint_user2: validate_hint_length(dto.hint_user2.unwrap_or_default())?,
            status_user1: dto.status_user1.map(Into::into).unwrap_or(ProgressStatus::Pending),
            status_user2: dto.status_user2.map(Into::into).unwrap_or(ProgressStatus::Pending),
            xp_reward: Some(validate_xp_reward(dto.xp_reward.unwrap_or(0))?),
        })
    }
}

/// Partial quest update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuestParam {
    pub location_name: Option<String>,
    pub activity: Option<String>,
    pub quest_date: Option<NaiveDate>,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub hint_user1: Option<String>,
    pub hint_user2: Option<String>,
    pub status_user1: Option<ProgressStatus>,
    pub status_user2: Option<ProgressStatus>,
    pub xp_reward: Option<i32>,
}

impl UpdateQuestParam {
    pub fn from_dto(dto: UpdateQuestDto) -> Result<Self, AppError> {
        Ok(Self {
            location_name: dto
                .location_name
                .map(|name| validate_not_blank("location_name", name))
                .transpose()?,
            activity: dto
                .activity
                .map(|activity| validate_not_blank("activity", activity))
                .transpose()?,
            quest_date: dto.quest_date,
            location_latitude: dto.location_latitude,
            location_longitude: dto.location_longitude,
            hint_user1: dto.hint_user1.map(validate_hint_length).transpose()?,
            hint_user2: dto.hint_user2.map(validate_hint_length).transpose()?,
            status_user1: dto.status_user1.map(Into::into),
            status_user2: dto.status_user2.map(Into::into),
            xp_reward: dto.xp_reward.map(validate_xp_reward).transpose()?,
        })
    }
}

/// Validates a hint posted by a participant: present, non-blank and short enough.
pub fn validate_hint(hint: Option<String>) -> Result<String, AppError> {
    let hint = hint.unwrap_or_default();
    if hint.trim().is_empty() {
        return Err(AppError::BadRequest("hint: this field is required".to_string()));
    }
    validate_hint_length(hint)
}

fn validate_hint_length(hint: String) -> Result<String, AppError> {
    if hint.chars().count() > MAX_HINT_LENGTH {
        return Err(AppError::BadRequest(format!(
            "hint: ensure this field has no more than {} characters",
            MAX_HINT_LENGTH
        )));
    }
    Ok(hint)
}

fn validate_xp_reward(xp_reward: i32) -> Result<i32, AppError> {
    if !(0..=MAX_XP_REWARD).contains(&xp_reward) {
        return Err(AppError::BadRequest(format!(
            "xp_reward: ensure this value is between 0 and {}",
            MAX_XP_REWARD
        )));
    }
    Ok(xp_reward)
}

fn validate_not_blank(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "{}: this field may not be blank",
            field
        )));
    }
    Ok(value)
}
