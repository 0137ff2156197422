//! Preference catalog and per-user preference models.

use chrono::{DateTime, Utc};

use crate::{
    model::preference::{PreferenceDto, UserPreferenceDto},
    server::error::AppError,
};

/// Longest preference name accepted.
pub const MAX_PREFERENCE_NAME_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub id: i32,
    pub name: String,
}

impl Preference {
    pub fn into_dto(self) -> PreferenceDto {
        PreferenceDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::preference::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// A preference attached to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreference {
    pub user_id: i32,
    pub preference: Preference,
    pub created_at: DateTime<Utc>,
}

impl UserPreference {
    pub fn into_dto(self) -> UserPreferenceDto {
        UserPreferenceDto {
            preference: self.preference.into_dto(),
            created_at: self.created_at,
        }
    }

    pub fn from_entity(
        entity: entity::user_preference::Model,
        preference: entity::preference::Model,
    ) -> Self {
        Self {
            user_id: entity.user_id,
            preference: Preference::from_entity(preference),
            created_at: entity.created_at,
        }
    }
}

/// Trims a preference name and checks it is non-blank and short enough.
pub fn validate_preference_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "name: this field may not be blank".to_string(),
        ));
    }
    if name.chars().count() > MAX_PREFERENCE_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "name: ensure this field has no more than {} characters",
            MAX_PREFERENCE_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}
