//! Expiring token repository.
//!
//! Tokens are stored by the SHA-256 hex digest of their plaintext. Expiry is judged by
//! the caller so an expired token can be told apart from an unknown one in logs.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::token::{CreateTokenParam, Token};

pub struct TokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a token digest.
    ///
    /// # Arguments
    /// - `param` - Owner, digest, name and expiry
    ///
    /// # Returns
    /// - `Ok(Token)` - Stored token metadata
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTokenParam) -> Result<Token, DbErr> {
        let entity = entity::expiring_token::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            key_hash: ActiveValue::Set(param.key_hash),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(param.expires_at),
            revoked: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Token::from_entity(entity))
    }

    /// Finds an unrevoked token by digest, regardless of expiry.
    ///
    /// # Arguments
    /// - `key_hash` - Hex SHA-256 of the presented plaintext
    ///
    /// # Returns
    /// - `Ok(Some(Token))` - Unrevoked token with that digest
    /// - `Ok(None)` - Unknown or revoked
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_unrevoked_by_hash(&self, key_hash: &str) -> Result<Option<Token>, DbErr> {
        let entity = entity::prelude::ExpiringToken::find()
            .filter(entity::expiring_token::Column::KeyHash.eq(key_hash))
            .filter(entity::expiring_token::Column::Revoked.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Token::from_entity))
    }

    /// Marks a token revoked.
    ///
    /// # Returns
    /// - `Ok(true)` - A token was revoked
    /// - `Ok(false)` - No token with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn revoke(&self, token_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ExpiringToken::update_many()
            .filter(entity::expiring_token::Column::Id.eq(token_id))
            .col_expr(
                entity::expiring_token::Column::Revoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists a user's tokens, newest first, including revoked and expired ones.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Token>, DbErr> {
        let entities = entity::prelude::ExpiringToken::find()
            .filter(entity::expiring_token::Column::UserId.eq(user_id))
            .order_by_desc(entity::expiring_token::Column::CreatedAt)
            .order_by_desc(entity::expiring_token::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Token::from_entity).collect())
    }
}
