//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account rows. Lookups by email
//! expect an already normalised address since emails are stored trimmed and lowercased.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User, UserSummary};

/// Repository providing database operations for user accounts.
///
/// Generic over the connection so it can run inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active user.
    ///
    /// # Arguments
    /// - `param` - Account fields including the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            phone_number: ActiveValue::Set(param.phone_number),
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            is_active: ActiveValue::Set(true),
            provider: ActiveValue::Set(param.provider),
            provider_id: ActiveValue::Set(param.provider_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalised email.
    ///
    /// # Arguments
    /// - `email` - Trimmed, lowercased email address
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by phone number.
    pub async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn phone_exists(&self, phone_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads summaries for a set of users keyed by ID.
    ///
    /// Unknown IDs are simply absent from the returned map.
    ///
    /// # Arguments
    /// - `user_ids` - IDs to load, duplicates allowed
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Summaries of the users that exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_summaries(&self, user_ids: &[i32]) -> Result<HashMap<i32, UserSummary>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .iter()
            .map(|user| (user.id, UserSummary::from_entity(user)))
            .collect())
    }

    /// Overwrites first and last name.
    ///
    /// # Returns
    /// - `Ok(())` - Names updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_names(
        &self,
        user_id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::FirstName,
                sea_orm::sea_query::Expr::value(first_name),
            )
            .col_expr(
                entity::user::Column::LastName,
                sea_orm::sea_query::Expr::value(last_name),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
