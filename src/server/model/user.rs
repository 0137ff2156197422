//! User domain models and parameters.
//!
//! Provides the account model used for authentication and the lightweight summary
//! embedded in matches and messages.

use chrono::{DateTime, Utc};

use crate::model::user::UserSummaryDto;

/// Account with credentials and activation state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub username: String,
    /// Bcrypt hash, empty for accounts that only sign in through the identity provider.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            phone_number: entity.phone_number,
            username: entity.username,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Identifier and email of a user, as shown to other users.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub email: Option<String>,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            email: self.email,
        }
    }

    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email.clone(),
        }
    }
}

/// Parameters for inserting a new account row.
#[derive(Debug, Clone, Default)]
pub struct CreateUserParam {
    /// Normalised email, if any.
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub provider: String,
    pub provider_id: String,
}
