//! Match repository.
//!
//! Matches are stored with bare user IDs. Reads that return full [`UserMatch`] values
//! load the participant summaries with one extra query per call.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use entity::status::ProgressStatus;

use crate::server::{
    data::user::UserRepository,
    model::user_match::{CreateMatchParam, MatchRef, MatchSide, UpdateMatchParam, UserMatch},
};

/// Repository providing database operations for matches.
pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new MatchRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `MatchRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a match with both sides pending and no ratings.
    ///
    /// # Arguments
    /// - `param` - Participants and match time
    ///
    /// # Returns
    /// - `Ok(UserMatch)` - The created match
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMatchParam) -> Result<UserMatch, DbErr> {
        let entity = entity::user_match::ActiveModel {
            user1_id: ActiveValue::Set(param.user1_id),
            user2_id: ActiveValue::Set(param.user2_id),
            status_user1: ActiveValue::Set(ProgressStatus::Pending),
            status_user2: ActiveValue::Set(ProgressStatus::Pending),
            matched_at: ActiveValue::Set(param.matched_at),
            user1_rating: ActiveValue::Set(None),
            user2_rating: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut matches = self.with_summaries(vec![entity]).await?;
        matches
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("created match".to_string()))
    }

    /// Finds a match by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserMatch))` - Match found
    /// - `Ok(None)` - No match with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, match_id: i32) -> Result<Option<UserMatch>, DbErr> {
        let Some(entity) = entity::prelude::UserMatch::find_by_id(match_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_summaries(vec![entity]).await?.pop())
    }

    /// Finds the participants of a match without loading their summaries.
    pub async fn find_ref(&self, match_id: i32) -> Result<Option<MatchRef>, DbErr> {
        let entity = entity::prelude::UserMatch::find_by_id(match_id)
            .one(self.db)
            .await?;

        Ok(entity.as_ref().map(MatchRef::from_entity))
    }

    /// Finds the match between two users in either order.
    ///
    /// # Arguments
    /// - `user_a` - One participant
    /// - `user_b` - The other participant
    ///
    /// # Returns
    /// - `Ok(Some(UserMatch))` - The pair is matched
    /// - `Ok(None)` - No match between the pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_between(&self, user_a: i32, user_b: i32) -> Result<Option<UserMatch>, DbErr> {
        let Some(entity) = entity::prelude::UserMatch::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::user_match::Column::User1Id.eq(user_a))
                            .add(entity::user_match::Column::User2Id.eq(user_b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::user_match::Column::User1Id.eq(user_b))
                            .add(entity::user_match::Column::User2Id.eq(user_a)),
                    ),
            )
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_summaries(vec![entity]).await?.pop())
    }

    /// Lists the matches a user takes part in on either side, newest match first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<UserMatch>, DbErr> {
        let entities = entity::prelude::UserMatch::find()
            .filter(participant(user_id))
            .order_by_desc(entity::user_match::Column::MatchedAt)
            .order_by_desc(entity::user_match::Column::Id)
            .all(self.db)
            .await?;

        self.with_summaries(entities).await
    }

    /// IDs of every user the given user is matched with.
    pub async fn get_partner_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let pairs = entity::prelude::UserMatch::find()
            .select_only()
            .column(entity::user_match::Column::User1Id)
            .column(entity::user_match::Column::User2Id)
            .filter(participant(user_id))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;

        Ok(pairs
            .into_iter()
            .map(|(user1, user2)| if user1 == user_id { user2 } else { user1 })
            .collect())
    }

    /// Lists matches carrying at least one rating, oldest match first.
    ///
    /// Matches without a match time sort before the rest.
    pub async fn get_rated(&self) -> Result<Vec<UserMatch>, DbErr> {
        let entities = entity::prelude::UserMatch::find()
            .filter(
                Condition::any()
                    .add(entity::user_match::Column::User1Rating.is_not_null())
                    .add(entity::user_match::Column::User2Rating.is_not_null()),
            )
            .order_by_asc(entity::user_match::Column::MatchedAt)
            .order_by_asc(entity::user_match::Column::Id)
            .all(self.db)
            .await?;

        self.with_summaries(entities).await
    }

    /// Lists matches that have no quest dated `date`.
    ///
    /// # Arguments
    /// - `date` - Quest date to check
    ///
    /// # Returns
    /// - `Ok(Vec<MatchRef>)` - Matches still without a quest that day, by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_without_quest_on(&self, date: NaiveDate) -> Result<Vec<MatchRef>, DbErr> {
        let served: Vec<i32> = entity::prelude::Quest::find()
            .select_only()
            .column(entity::quest::Column::MatchId)
            .filter(entity::quest::Column::QuestDate.eq(date))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let mut query = entity::prelude::UserMatch::find();
        if !served.is_empty() {
            query = query.filter(entity::user_match::Column::Id.is_not_in(served));
        }

        let entities = query
            .order_by_asc(entity::user_match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.iter().map(MatchRef::from_entity).collect())
    }

    /// Applies a partial update of statuses and ratings.
    ///
    /// # Returns
    /// - `Ok(Some(UserMatch))` - The updated match
    /// - `Ok(None)` - No match with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        match_id: i32,
        param: UpdateMatchParam,
    ) -> Result<Option<UserMatch>, DbErr> {
        let Some(entity) = entity::prelude::UserMatch::find_by_id(match_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_match::ActiveModel = entity.into();
        if let Some(status) = param.status_user1 {
            active.status_user1 = ActiveValue::Set(status);
        }
        if let Some(status) = param.status_user2 {
            active.status_user2 = ActiveValue::Set(status);
        }
        if let Some(rating) = param.user1_rating {
            active.user1_rating = ActiveValue::Set(Some(rating));
        }
        if let Some(rating) = param.user2_rating {
            active.user2_rating = ActiveValue::Set(Some(rating));
        }

        let entity = active.update(self.db).await?;

        Ok(self.with_summaries(vec![entity]).await?.pop())
    }

    /// Stores the rating given by one side of a match.
    ///
    /// # Arguments
    /// - `match_id` - ID of the match
    /// - `side` - Side of the rater
    /// - `rating` - Rating in 1..=5
    ///
    /// # Returns
    /// - `Ok(Some(UserMatch))` - The updated match
    /// - `Ok(None)` - No match with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_rating(
        &self,
        match_id: i32,
        side: MatchSide,
        rating: i32,
    ) -> Result<Option<UserMatch>, DbErr> {
        let param = match side {
            MatchSide::User1 => UpdateMatchParam {
                user1_rating: Some(rating),
                ..Default::default()
            },
            MatchSide::User2 => UpdateMatchParam {
                user2_rating: Some(rating),
                ..Default::default()
            },
        };

        self.update(match_id, param).await
    }

    /// Deletes a match together with its chat, the chat's messages and its quests.
    ///
    /// # Returns
    /// - `Ok(true)` - Match deleted
    /// - `Ok(false)` - No match with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, match_id: i32) -> Result<bool, DbErr> {
        let chat_ids: Vec<i32> = entity::prelude::Chat::find()
            .select_only()
            .column(entity::chat::Column::Id)
            .filter(entity::chat::Column::MatchId.eq(match_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if !chat_ids.is_empty() {
            entity::prelude::Message::delete_many()
                .filter(entity::message::Column::ChatId.is_in(chat_ids.clone()))
                .exec(self.db)
                .await?;
            entity::prelude::Chat::delete_many()
                .filter(entity::chat::Column::Id.is_in(chat_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::Quest::delete_many()
            .filter(entity::quest::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::UserMatch::delete_by_id(match_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_summaries(
        &self,
        entities: Vec<entity::user_match::Model>,
    ) -> Result<Vec<UserMatch>, DbErr> {
        let user_ids: Vec<i32> = entities
            .iter()
            .flat_map(|m| [m.user1_id, m.user2_id])
            .collect();
        let users = UserRepository::new(self.db).get_summaries(&user_ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| UserMatch::from_entity(entity, &users))
            .collect())
    }
}

/// Condition selecting matches where `user_id` is on either side.
pub fn participant(user_id: i32) -> Condition {
    Condition::any()
        .add(entity::user_match::Column::User1Id.eq(user_id))
        .add(entity::user_match::Column::User2Id.eq(user_id))
}
