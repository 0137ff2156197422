//! Quest repository.
//!
//! Every read joins the owning match so callers can check participation without a
//! second query.

use chrono::Utc;
use entity::status::ProgressStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user_match::participant,
    model::{
        quest::{CreateQuestParam, Quest, UpdateQuestParam},
        user_match::{MatchRef, MatchSide},
    },
};

/// Repository providing database operations for quests.
pub struct QuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestRepository<'a, C> {
    /// Creates a new QuestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `QuestRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a quest.
    ///
    /// # Arguments
    /// - `param` - Validated quest fields
    ///
    /// # Returns
    /// - `Ok(Quest)` - The created quest with its match
    /// - `Err(DbErr)` - Database error, including a duplicate location for the match
    pub async fn create(&self, param: CreateQuestParam) -> Result<Quest, DbErr> {
        let now = Utc::now();
        let completed = param.status_user1 == ProgressStatus::Completed
            && param.status_user2 == ProgressStatus::Completed;
        let entity = entity::quest::ActiveModel {
            match_id: ActiveValue::Set(param.match_id),
            location_name: ActiveValue::Set(param.location_name),
            hint_user1: ActiveValue::Set(param.hint_user1),
            hint_user2: ActiveValue::Set(param.hint_user2),
            activity: ActiveValue::Set(param.activity),
            quest_date: ActiveValue::Set(param.quest_date),
            location_latitude: ActiveValue::Set(param.location_latitude),
            location_longitude: ActiveValue::Set(param.location_longitude),
            status_user1: ActiveValue::Set(param.status_user1),
            status_user2: ActiveValue::Set(param.status_user2),
            xp_reward: ActiveValue::Set(param.xp_reward),
            xp_awarded: ActiveValue::Set(completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("match of quest {}", entity.id)))
    }

    /// Finds a quest by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Quest))` - Quest found
    /// - `Ok(None)` - No quest with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, quest_id: i32) -> Result<Option<Quest>, DbErr> {
        let row = entity::prelude::Quest::find_by_id(quest_id)
            .find_also_related(entity::prelude::UserMatch)
            .one(self.db)
            .await?;

        Ok(row.and_then(into_quest))
    }

    /// Lists quests of the user's matches, latest quest date first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Quest>, DbErr> {
        let rows = entity::prelude::Quest::find()
            .find_also_related(entity::prelude::UserMatch)
            .filter(participant(user_id))
            .order_by_desc(entity::quest::Column::QuestDate)
            .order_by_desc(entity::quest::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(into_quest).collect())
    }

    /// Checks whether a match already has a quest at a location.
    pub async fn location_exists(&self, match_id: i32, location_name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Quest::find()
            .filter(entity::quest::Column::MatchId.eq(match_id))
            .filter(entity::quest::Column::LocationName.eq(location_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Location names already used by a match's quests.
    pub async fn get_location_names(&self, match_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Quest::find()
            .select_only()
            .column(entity::quest::Column::LocationName)
            .filter(entity::quest::Column::MatchId.eq(match_id))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Quest))` - The updated quest
    /// - `Ok(None)` - No quest with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, quest_id: i32, param: UpdateQuestParam) -> Result<Option<Quest>, DbErr> {
        let Some(entity) = entity::prelude::Quest::find_by_id(quest_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::quest::ActiveModel = entity.into();
        if let Some(location_name) = param.location_name {
            active.location_name = ActiveValue::Set(location_name);
        }
        if let Some(activity) = param.activity {
            active.activity = ActiveValue::Set(activity);
        }
        if let Some(quest_date) = param.quest_date {
            active.quest_date = ActiveValue::Set(quest_date);
        }
        if let Some(latitude) = param.location_latitude {
            active.location_latitude = ActiveValue::Set(Some(latitude));
        }
        if let Some(longitude) = param.location_longitude {
            active.location_longitude = ActiveValue::Set(Some(longitude));
        }
        if let Some(hint) = param.hint_user1 {
            active.hint_user1 = ActiveValue::Set(hint);
        }
        if let Some(hint) = param.hint_user2 {
            active.hint_user2 = ActiveValue::Set(hint);
        }
        if let Some(status) = param.status_user1 {
            active.status_user1 = ActiveValue::Set(status);
        }
        if let Some(status) = param.status_user2 {
            active.status_user2 = ActiveValue::Set(status);
        }
        if let Some(xp_reward) = param.xp_reward {
            active.xp_reward = ActiveValue::Set(Some(xp_reward));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_id(quest_id).await
    }

    /// Marks a completed quest's XP as awarded.
    ///
    /// The flag is only flipped from unset, so of any number of callers racing on
    /// the same quest exactly one gets `true`.
    ///
    /// # Returns
    /// - `Ok(true)` - This call claimed the award
    /// - `Ok(false)` - Already awarded, not completed by both sides, or no such quest
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim_xp_award(&self, quest_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Quest::update_many()
            .col_expr(
                entity::quest::Column::XpAwarded,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::quest::Column::Id.eq(quest_id))
            .filter(entity::quest::Column::XpAwarded.eq(false))
            .filter(entity::quest::Column::StatusUser1.eq(ProgressStatus::Completed))
            .filter(entity::quest::Column::StatusUser2.eq(ProgressStatus::Completed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Stores the hint left by one side of the quest's match.
    pub async fn set_hint(
        &self,
        quest_id: i32,
        side: MatchSide,
        hint: String,
    ) -> Result<Option<Quest>, DbErr> {
        let param = match side {
            MatchSide::User1 => UpdateQuestParam {
                hint_user1: Some(hint),
                ..Default::default()
            },
            MatchSide::User2 => UpdateQuestParam {
                hint_user2: Some(hint),
                ..Default::default()
            },
        };

        self.update(quest_id, param).await
    }

    /// Deletes a quest.
    ///
    /// # Returns
    /// - `Ok(true)` - Quest deleted
    /// - `Ok(false)` - No quest with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, quest_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Quest::delete_by_id(quest_id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_quest(
    (quest, user_match): (entity::quest::Model, Option<entity::user_match::Model>),
) -> Option<Quest> {
    let user_match = MatchRef::from_entity(&user_match?);
    Some(Quest::from_entity(quest, user_match))
}
