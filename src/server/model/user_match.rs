//! Match domain models and parameters.
//!
//! A match pairs two users. Each side tracks its own progress status and the rating
//! it gave the other side, so most operations first work out which side the caller is.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::status::ProgressStatus;

use crate::{
    model::user_match::{MatchDto, MatchRefDto, UpdateMatchDto},
    server::{error::AppError, model::user::UserSummary},
};

/// Which participant of a match a user is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSide {
    User1,
    User2,
}

/// Match with both participants resolved to summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMatch {
    pub id: i32,
    pub user1: UserSummary,
    pub user2: UserSummary,
    pub status_user1: ProgressStatus,
    pub status_user2: ProgressStatus,
    pub matched_at: Option<DateTime<Utc>>,
    pub user1_rating: Option<i32>,
    pub user2_rating: Option<i32>,
}

impl UserMatch {
    /// Converts the match domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MatchDto` - The converted match DTO
    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            user1: self.user1.into_dto(),
            user2: self.user2.into_dto(),
            status_user1: self.status_user1.into(),
            status_user2: self.status_user2.into(),
            matched_at: self.matched_at,
            user1_rating: self.user1_rating,
            user2_rating: self.user2_rating,
        }
    }

    /// Converts an entity model to a match domain model.
    ///
    /// Participants missing from `users` are represented by their ID alone.
    ///
    /// # Arguments
    /// - `entity` - The match entity
    /// - `users` - Summaries of the users referenced by the match, keyed by ID
    ///
    /// # Returns
    /// - `UserMatch` - The converted domain model
    pub fn from_entity(
        entity: entity::user_match::Model,
        users: &HashMap<i32, UserSummary>,
    ) -> Self {
        let summary = |id: i32| {
            users
                .get(&id)
                .cloned()
                .unwrap_or(UserSummary { id, email: None })
        };

        Self {
            id: entity.id,
            user1: summary(entity.user1_id),
            user2: summary(entity.user2_id),
            status_user1: entity.status_user1,
            status_user2: entity.status_user2,
            matched_at: entity.matched_at,
            user1_rating: entity.user1_rating,
            user2_rating: entity.user2_rating,
        }
    }

    pub fn match_ref(&self) -> MatchRef {
        MatchRef {
            id: self.id,
            user1_id: self.user1.id,
            user2_id: self.user2.id,
        }
    }
}

/// Match identity without participant details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRef {
    pub id: i32,
    pub user1_id: i32,
    pub user2_id: i32,
}

impl MatchRef {
    pub fn into_dto(self) -> MatchRefDto {
        MatchRefDto {
            id: self.id,
            user1_id: self.user1_id,
            user2_id: self.user2_id,
        }
    }

    pub fn from_entity(entity: &entity::user_match::Model) -> Self {
        Self {
            id: entity.id,
            user1_id: entity.user1_id,
            user2_id: entity.user2_id,
        }
    }

    /// Which side `user_id` is on, if any.
    pub fn side_of(&self, user_id: i32) -> Option<MatchSide> {
        if self.user1_id == user_id {
            Some(MatchSide::User1)
        } else if self.user2_id == user_id {
            Some(MatchSide::User2)
        } else {
            None
        }
    }

    pub fn includes(&self, user_id: i32) -> bool {
        self.side_of(user_id).is_some()
    }

    /// The participant that is not `user_id`.
    pub fn other(&self, user_id: i32) -> i32 {
        if self.user1_id == user_id {
            self.user2_id
        } else {
            self.user1_id
        }
    }
}

/// Parameters for inserting a new match.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMatchParam {
    pub user1_id: i32,
    pub user2_id: i32,
    pub matched_at: Option<DateTime<Utc>>,
}

/// Partial match update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMatchParam {
    pub status_user1: Option<ProgressStatus>,
    pub status_user2: Option<ProgressStatus>,
    pub user1_rating: Option<i32>,
    pub user2_rating: Option<i32>,
}

impl UpdateMatchParam {
    /// Validates an update request.
    ///
    /// # Returns
    /// - `Ok(UpdateMatchParam)` - Validated update
    /// - `Err(AppError::BadRequest)` - A rating outside 1..=5
    pub fn from_dto(dto: UpdateMatchDto) -> Result<Self, AppError> {
        Ok(Self {
            status_user1: dto.status_user1.map(Into::into),
            status_user2: dto.status_user2.map(Into::into),
            user1_rating: dto.user1_rating.map(validate_rating).transpose()?,
            user2_rating: dto.user2_rating.map(validate_rating).transpose()?,
        })
    }
}

/// Accepts ratings from 1 to 5 inclusive.
pub fn validate_rating(rating: i32) -> Result<i32, AppError> {
    if (1..=5).contains(&rating) {
        Ok(rating)
    } else {
        Err(AppError::BadRequest(
            "rating: must be an integer between 1 and 5".to_string(),
        ))
    }
}

/// Extracts a rating from an untyped JSON value.
///
/// # Returns
/// - `Ok(i32)` - An integer in 1..=5
/// - `Err(AppError::BadRequest)` - Missing, not an integer, or out of range
pub fn parse_rating(value: Option<&serde_json::Value>) -> Result<i32, AppError> {
    let rating = value
        .and_then(serde_json::Value::as_i64)
        .and_then(|rating| i32::try_from(rating).ok())
        .ok_or_else(|| {
            AppError::BadRequest("rating: must be an integer between 1 and 5".to_string())
        })?;

    validate_rating(rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_side_of() {
        let match_ref = MatchRef {
            id: 1,
            user1_id: 10,
            user2_id: 20,
        };

        assert_eq!(match_ref.side_of(10), Some(MatchSide::User1));
        assert_eq!(match_ref.side_of(20), Some(MatchSide::User2));
        assert_eq!(match_ref.side_of(30), None);
        assert_eq!(match_ref.other(10), 20);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some(&json!(4))).unwrap(), 4);
        assert!(parse_rating(None).is_err());
        assert!(parse_rating(Some(&json!("4"))).is_err());
        assert!(parse_rating(Some(&json!(4.5))).is_err());
        assert!(parse_rating(Some(&json!(0))).is_err());
        assert!(parse_rating(Some(&json!(6))).is_err());
    }
}
