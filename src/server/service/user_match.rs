//! Match lifecycle.
//!
//! Every path that creates a match also creates its chat inside the same transaction,
//! so a match never exists without its conversation.

use chrono::Utc;
use entity::status::ChatStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{chat::ChatRepository, user::UserRepository, user_match::MatchRepository},
    error::{auth::AuthError, AppError},
    model::user_match::{parse_rating, CreateMatchParam, UpdateMatchParam, UserMatch},
};

/// Inserts a match between two users together with its active chat.
///
/// Callers run this on a transaction so both rows land or neither does.
pub async fn create_with_chat<C: ConnectionTrait>(
    db: &C,
    user1_id: i32,
    user2_id: i32,
) -> Result<UserMatch, DbErr> {
    let user_match = MatchRepository::new(db)
        .create(CreateMatchParam {
            user1_id,
            user2_id,
            matched_at: Some(Utc::now()),
        })
        .await?;
    ChatRepository::new(db)
        .create(user_match.match_ref(), ChatStatus::Active)
        .await?;

    Ok(user_match)
}

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's matches on either side, most recent first
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<UserMatch>, AppError> {
        Ok(MatchRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Matches the caller with another user.
    ///
    /// # Arguments
    /// - `caller_id` - The requesting user, stored as user1
    /// - `user2_id` - The user to match with
    ///
    /// # Returns
    /// - `Ok(UserMatch)` - The new match; its chat has been created too
    /// - `Err(AppError::BadRequest)` - Self match, unknown user, or the pair is already matched
    pub async fn create(&self, caller_id: i32, user2_id: i32) -> Result<UserMatch, AppError> {
        if caller_id == user2_id {
            return Err(AppError::BadRequest(
                "user2_id: you cannot match with yourself".to_string(),
            ));
        }
        if UserRepository::new(self.db).find_by_id(user2_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "user2_id: user {} does not exist",
                user2_id
            )));
        }
        if MatchRepository::new(self.db)
            .find_between(caller_id, user2_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "user2_id: these users are already matched".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let user_match = create_with_chat(&txn, caller_id, user2_id).await?;
        txn.commit().await?;

        tracing::info!(
            "Created match {} between users {} and {}",
            user_match.id,
            caller_id,
            user2_id
        );

        Ok(user_match)
    }

    /// Returns the existing match with a user, or creates one.
    ///
    /// # Returns
    /// - `Ok((UserMatch, false))` - The pair was already matched
    /// - `Ok((UserMatch, true))` - A new match and chat were created
    /// - `Err(AppError::BadRequest)` - Self match
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn match_with(
        &self,
        caller_id: i32,
        user_id: i32,
    ) -> Result<(UserMatch, bool), AppError> {
        if caller_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot match with yourself".to_string(),
            ));
        }
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(existing) = MatchRepository::new(self.db)
            .find_between(caller_id, user_id)
            .await?
        {
            return Ok((existing, false));
        }

        let txn = self.db.begin().await?;
        let user_match = create_with_chat(&txn, caller_id, user_id).await?;
        txn.commit().await?;

        Ok((user_match, true))
    }

    /// Gets one of the caller's matches. Matches of other users are reported as missing.
    pub async fn get(&self, caller_id: i32, match_id: i32) -> Result<UserMatch, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .filter(|user_match| user_match.match_ref().includes(caller_id))
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))
    }

    /// Applies a partial update of statuses and ratings to one of the caller's matches
    pub async fn update(
        &self,
        caller_id: i32,
        match_id: i32,
        param: UpdateMatchParam,
    ) -> Result<UserMatch, AppError> {
        self.get(caller_id, match_id).await?;

        MatchRepository::new(self.db)
            .update(match_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))
    }

    /// Deletes one of the caller's matches with its chat, messages and quests
    pub async fn delete(&self, caller_id: i32, match_id: i32) -> Result<(), AppError> {
        self.get(caller_id, match_id).await?;

        let txn = self.db.begin().await?;
        MatchRepository::new(&txn).delete(match_id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Records the caller's rating of their partner.
    ///
    /// The rating is validated only after the match and the caller's side are known.
    ///
    /// # Arguments
    /// - `caller_id` - The rating user
    /// - `match_id` - ID of the match
    /// - `rating` - Raw rating from the request body
    ///
    /// # Returns
    /// - `Ok(UserMatch)` - The updated match
    /// - `Err(AppError::NotFound)` - Unknown match
    /// - `Err(AuthError::AccessDenied)` - The caller is not part of the match
    /// - `Err(AppError::BadRequest)` - Missing, non-integer or out of range rating
    pub async fn rate(
        &self,
        caller_id: i32,
        match_id: i32,
        rating: Option<&serde_json::Value>,
    ) -> Result<UserMatch, AppError> {
        let repo = MatchRepository::new(self.db);

        let Some(match_ref) = repo.find_ref(match_id).await? else {
            return Err(AppError::NotFound("Match not found".to_string()));
        };
        let Some(side) = match_ref.side_of(caller_id) else {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("not a participant of match {}", match_id),
            )
            .into());
        };

        let rating = parse_rating(rating)?;

        repo.set_rating(match_id, side, rating)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))
    }
}
