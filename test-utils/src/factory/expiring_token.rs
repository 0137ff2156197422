//! Token factory for creating API token rows.
//!
//! Tokens are stored by hash only, so the factory takes the hash the caller derived
//! from a raw key of its choosing.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test tokens with customizable fields.
pub struct TokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    key_hash: String,
    name: String,
    expires_at: DateTime<Utc>,
    revoked: bool,
}

impl<'a> TokenFactory<'a> {
    /// Creates a new TokenFactory with default values.
    ///
    /// Defaults:
    /// - key_hash: `"hash{id}"` where id is auto-incremented
    /// - name: `"test"`
    /// - expires_at: 30 days from now
    /// - revoked: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user that owns the token
    ///
    /// # Returns
    /// - `TokenFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            key_hash: format!("hash{}", next_id()),
            name: "test".to_string(),
            expires_at: Utc::now() + Duration::days(30),
            revoked: false,
        }
    }

    /// Sets the stored key hash.
    pub fn key_hash(mut self, key_hash: impl Into<String>) -> Self {
        self.key_hash = key_hash.into();
        self
    }

    /// Sets the expiry instant.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets whether the token has been revoked.
    pub fn revoked(mut self, revoked: bool) -> Self {
        self.revoked = revoked;
        self
    }

    /// Builds and inserts the token entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::expiring_token::Model)` - Created token entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::expiring_token::Model, DbErr> {
        entity::expiring_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            key_hash: ActiveValue::Set(self.key_hash),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(self.expires_at),
            revoked: ActiveValue::Set(self.revoked),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a token with default values for the given user.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::expiring_token::Model, DbErr> {
    TokenFactory::new(db, user_id).build().await
}
