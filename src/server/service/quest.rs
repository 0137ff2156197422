use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{profile::ProfileRepository, quest::QuestRepository, user_match::MatchRepository},
    error::{auth::AuthError, AppError},
    model::quest::{validate_hint, CreateQuestParam, Quest, UpdateQuestParam},
};

pub struct QuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists quests of the caller's matches, latest quest date first
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Quest>, AppError> {
        Ok(QuestRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Creates a quest on one of the caller's matches.
    ///
    /// # Returns
    /// - `Ok(Quest)` - The new quest
    /// - `Err(AppError::BadRequest)` - The match is not the caller's, or the location is
    ///   already used by a quest of that match
    pub async fn create(&self, caller_id: i32, param: CreateQuestParam) -> Result<Quest, AppError> {
        let owned = MatchRepository::new(self.db)
            .find_ref(param.match_id)
            .await?
            .is_some_and(|match_ref| match_ref.includes(caller_id));
        if !owned {
            return Err(AppError::BadRequest(
                "match_id: not one of your matches".to_string(),
            ));
        }

        let repo = QuestRepository::new(self.db);
        if repo
            .location_exists(param.match_id, &param.location_name)
            .await?
        {
            return Err(AppError::BadRequest(
                "location_name: this match already has a quest at this location".to_string(),
            ));
        }

        Ok(repo.create(param).await?)
    }

    /// Gets a quest of one of the caller's matches
    pub async fn get(&self, caller_id: i32, quest_id: i32) -> Result<Quest, AppError> {
        QuestRepository::new(self.db)
            .find_by_id(quest_id)
            .await?
            .filter(|quest| quest.user_match.includes(caller_id))
            .ok_or_else(|| AppError::NotFound("Quest not found".to_string()))
    }

    /// Applies a partial update to a quest.
    ///
    /// The first update that leaves both statuses completed awards the quest's XP
    /// reward to both participants in the same transaction. The award is recorded on
    /// the quest, so reopening and completing it again, or a concurrent update,
    /// never pays out a second time.
    ///
    /// # Returns
    /// - `Ok(Quest)` - The updated quest
    /// - `Err(AppError::NotFound)` - Unknown quest or not a participant
    /// - `Err(AppError::BadRequest)` - Renamed onto a location already used by the match
    pub async fn update(
        &self,
        caller_id: i32,
        quest_id: i32,
        param: UpdateQuestParam,
    ) -> Result<Quest, AppError> {
        let current = self.get(caller_id, quest_id).await?;

        if let Some(name) = &param.location_name {
            if *name != current.location_name
                && QuestRepository::new(self.db)
                    .location_exists(current.user_match.id, name)
                    .await?
            {
                return Err(AppError::BadRequest(
                    "location_name: this match already has a quest at this location".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;
        let repo = QuestRepository::new(&txn);

        let updated = repo
            .update(quest_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Quest not found".to_string()))?;

        if updated.is_completed() && repo.claim_xp_award(quest_id).await? {
            let reward = updated.xp_reward.unwrap_or(0);
            ProfileRepository::new(&txn)
                .add_xp(
                    &[updated.user_match.user1_id, updated.user_match.user2_id],
                    reward,
                )
                .await?;
            tracing::info!("Quest {} completed, awarded {} XP", quest_id, reward);
        }

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a quest of one of the caller's matches
    pub async fn delete(&self, caller_id: i32, quest_id: i32) -> Result<(), AppError> {
        self.get(caller_id, quest_id).await?;
        QuestRepository::new(self.db).delete(quest_id).await?;

        Ok(())
    }

    /// Leaves the caller's hint on a quest.
    ///
    /// # Arguments
    /// - `caller_id` - The participant leaving the hint
    /// - `quest_id` - ID of the quest
    /// - `hint` - Raw hint from the request body
    ///
    /// # Returns
    /// - `Ok(Quest)` - Quest with `hint_user1` or `hint_user2` set by the caller's side
    /// - `Err(AppError::NotFound)` - Unknown quest
    /// - `Err(AuthError::AccessDenied)` - The caller is not part of the quest's match
    /// - `Err(AppError::BadRequest)` - Blank, missing or overlong hint
    pub async fn post_hint(
        &self,
        caller_id: i32,
        quest_id: i32,
        hint: Option<String>,
    ) -> Result<Quest, AppError> {
        let repo = QuestRepository::new(self.db);

        let Some(quest) = repo.find_by_id(quest_id).await? else {
            return Err(AppError::NotFound("Quest not found".to_string()));
        };
        let Some(side) = quest.user_match.side_of(caller_id) else {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("not a participant of quest {}", quest_id),
            )
            .into());
        };

        let hint = validate_hint(hint)?;

        repo.set_hint(quest_id, side, hint)
            .await?
            .ok_or_else(|| AppError::NotFound("Quest not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use entity::status::ProgressStatus;
    use test_utils::{builder::TestBuilder, factory};

    fn create_param(match_id: i32, location_name: &str) -> CreateQuestParam {
        CreateQuestParam {
            match_id,
            location_name: location_name.to_string(),
            activity: "Coffee date".to_string(),
            quest_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            location_latitude: None,
            location_longitude: None,
            hint_user1: String::new(),
            hint_user2: String::new(),
            status_user1: ProgressStatus::Pending,
            status_user2: ProgressStatus::Pending,
            xp_reward: Some(10),
        }
    }

    #[tokio::test]
    async fn test_create_requires_own_match_and_unique_location() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _bob, user_match, _) =
            factory::helpers::create_match_with_chat(db).await.unwrap();
        let carol = factory::create_user(db).await.unwrap();

        let service = QuestService::new(db);

        let quest = service
            .create(alice.id, create_param(user_match.id, "Corner Cafe"))
            .await
            .unwrap();
        assert_eq!(quest.user_match.id, user_match.id);

        assert!(matches!(
            service
                .create(alice.id, create_param(user_match.id, "Corner Cafe"))
                .await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service
                .create(carol.id, create_param(user_match.id, "Other Place"))
                .await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_completion_awards_xp_once() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (bob, _, _) = factory::helpers::create_account(db).await.unwrap();
        let user_match = factory::create_match(db, alice.id, bob.id).await.unwrap();
        let quest = factory::quest::QuestFactory::new(db, user_match.id)
            .xp_reward(Some(10))
            .build()
            .await
            .unwrap();

        let service = QuestService::new(db);
        let complete = |side_one: bool| UpdateQuestParam {
            status_user1: side_one.then_some(ProgressStatus::Completed),
            status_user2: (!side_one).then_some(ProgressStatus::Completed),
            ..Default::default()
        };

        service.update(alice.id, quest.id, complete(true)).await.unwrap();
        let done = service.update(bob.id, quest.id, complete(false)).await.unwrap();
        assert!(done.is_completed());

        // Re-saving a completed quest must not award again.
        service.update(bob.id, quest.id, complete(false)).await.unwrap();

        let profiles = ProfileRepository::new(db);
        assert_eq!(profiles.find_by_user_id(alice.id).await.unwrap().unwrap().total_xp, 10);
        assert_eq!(profiles.find_by_user_id(bob.id).await.unwrap().unwrap().total_xp, 10);
    }

    #[tokio::test]
    async fn test_reopening_a_completed_quest_does_not_award_again() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (bob, _, _) = factory::helpers::create_account(db).await.unwrap();
        let user_match = factory::create_match(db, alice.id, bob.id).await.unwrap();
        let quest = factory::quest::QuestFactory::new(db, user_match.id)
            .xp_reward(Some(10))
            .build()
            .await
            .unwrap();

        let service = QuestService::new(db);
        let both_completed = UpdateQuestParam {
            status_user1: Some(ProgressStatus::Completed),
            status_user2: Some(ProgressStatus::Completed),
            ..Default::default()
        };
        let reopen = UpdateQuestParam {
            status_user1: Some(ProgressStatus::Pending),
            ..Default::default()
        };
        let complete_again = UpdateQuestParam {
            status_user1: Some(ProgressStatus::Completed),
            ..Default::default()
        };

        service.update(alice.id, quest.id, both_completed).await.unwrap();
        let reopened = service.update(alice.id, quest.id, reopen).await.unwrap();
        assert!(!reopened.is_completed());
        let again = service.update(alice.id, quest.id, complete_again).await.unwrap();
        assert!(again.is_completed());

        let profiles = ProfileRepository::new(db);
        assert_eq!(profiles.find_by_user_id(alice.id).await.unwrap().unwrap().total_xp, 10);
        assert_eq!(profiles.find_by_user_id(bob.id).await.unwrap().unwrap().total_xp, 10);
    }

    #[tokio::test]
    async fn test_reward_change_after_award_pays_nothing() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (bob, _, _) = factory::helpers::create_account(db).await.unwrap();
        let user_match = factory::create_match(db, alice.id, bob.id).await.unwrap();
        let quest = factory::quest::QuestFactory::new(db, user_match.id)
            .xp_reward(Some(5))
            .statuses(ProgressStatus::Completed, ProgressStatus::Completed)
            .build()
            .await
            .unwrap();

        let service = QuestService::new(db);
        let raised = service
            .update(
                alice.id,
                quest.id,
                UpdateQuestParam {
                    xp_reward: Some(100),
                    status_user2: Some(ProgressStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(raised.xp_reward, Some(100));

        let profiles = ProfileRepository::new(db);
        assert_eq!(profiles.find_by_user_id(alice.id).await.unwrap().unwrap().total_xp, 0);
        assert_eq!(profiles.find_by_user_id(bob.id).await.unwrap().unwrap().total_xp, 0);
    }

    #[tokio::test]
    async fn test_post_hint_uses_callers_side() {
        let test = TestBuilder::new().with_match_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (alice, bob, user_match, _) =
            factory::helpers::create_match_with_chat(db).await.unwrap();
        let carol = factory::create_user(db).await.unwrap();
        let quest = factory::create_quest(db, user_match.id).await.unwrap();

        let service = QuestService::new(db);

        let quest_after = service
            .post_hint(bob.id, quest.id, Some("Red scarf".to_string()))
            .await
            .unwrap();
        assert_eq!(quest_after.hint_user2, "Red scarf");
        assert_eq!(quest_after.hint_user1, "Look for the blue door");

        assert!(matches!(
            service.post_hint(alice.id, quest.id, Some("  ".to_string())).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.post_hint(carol.id, quest.id, Some("hi".to_string())).await,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
        assert!(matches!(
            service.post_hint(alice.id, 404, Some("hi".to_string())).await,
            Err(AppError::NotFound(_))
        ));
    }
}
