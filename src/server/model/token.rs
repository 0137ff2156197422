//! API token domain models.

use chrono::{DateTime, Utc};

use crate::model::auth::TokenDto;

/// Stored token metadata. The plaintext is never kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl Token {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            expires_at: self.expires_at,
            revoked: self.revoked,
        }
    }

    pub fn from_entity(entity: entity::expiring_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
            revoked: entity.revoked,
        }
    }
}

/// A freshly issued token together with the plaintext to hand to the client.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub plaintext: String,
    pub token: Token,
}

/// Parameters for storing a new token.
#[derive(Debug, Clone)]
pub struct CreateTokenParam {
    pub user_id: i32,
    /// Hex encoded SHA-256 of the plaintext.
    pub key_hash: String,
    pub name: String,
    pub expires_at: DateTime<Utc>,
}
