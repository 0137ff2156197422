//! Singles recommendations backed by the matching engine.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        preference::PreferenceRepository, profile::ProfileRepository,
        settings::SettingsRepository, user_match::MatchRepository,
        user_preference::UserPreferenceRepository,
    },
    engine::matching::{self, Interaction, UserFeatures, RECOMMENDATION_LIMIT},
    error::AppError,
    model::{recommendation::Recommendation, user_match::UserMatch},
    service::user_match::create_with_chat,
};

pub struct RecommendationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks candidate partners for a user.
    ///
    /// Vectors are rebuilt from the current profiles, preferences and ratings on every
    /// call. A candidate is active, not a service account, not already matched, not in
    /// ghost mode, not the caller and not an existing partner.
    ///
    /// # Arguments
    /// - `user_id` - The user to recommend for
    /// - `limit` - Maximum number of candidates
    ///
    /// # Returns
    /// - `Ok(Vec<Recommendation>)` - Candidates by descending similarity
    /// - `Err(AppError::DbErr)` - Database error while loading inputs
    pub async fn recommend(
        &self,
        user_id: i32,
        limit: usize,
    ) -> Result<Vec<Recommendation>, AppError> {
        let profiles = ProfileRepository::new(self.db).get_all().await?;
        let grouped = UserPreferenceRepository::new(self.db)
            .get_all_grouped()
            .await?;
        let catalog: Vec<i32> = PreferenceRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|preference| preference.id)
            .collect();
        let ghosts: HashSet<i32> = SettingsRepository::new(self.db)
            .get_ghost_user_ids()
            .await?
            .into_iter()
            .collect();
        let partners: HashSet<i32> = MatchRepository::new(self.db)
            .get_partner_ids(user_id)
            .await?
            .into_iter()
            .collect();
        let interactions = self.interactions().await?;

        let features: Vec<UserFeatures> = profiles
            .iter()
            .map(|profile| UserFeatures {
                user_id: profile.user_id,
                birth_year: profile.date_of_birth.map(|date| date.year()),
                preference_ids: grouped
                    .get(&profile.user_id)
                    .map(|preferences| preferences.iter().map(|p| p.id).collect())
                    .unwrap_or_default(),
            })
            .collect();

        let mut vectors = matching::build_vectors(&features, &catalog, Utc::now().year());
        matching::apply_interactions(&mut vectors, &interactions);

        let candidates: Vec<i32> = profiles
            .iter()
            .filter(|profile| {
                profile.is_active
                    && !profile.is_service_account
                    && !profile.is_matched
                    && profile.user_id != user_id
                    && !ghosts.contains(&profile.user_id)
                    && !partners.contains(&profile.user_id)
            })
            .map(|profile| profile.user_id)
            .collect();

        let ranked = matching::rank(&vectors, user_id, &candidates, limit);

        Ok(ranked
            .into_iter()
            .filter_map(|(candidate_id, score)| {
                let profile = profiles.iter().find(|p| p.user_id == candidate_id)?;
                let names = grouped
                    .get(&candidate_id)
                    .map(|preferences| preferences.iter().map(|p| p.name.clone()).collect())
                    .unwrap_or_default();
                Some(Recommendation::from_profile(profile, names, score))
            })
            .collect())
    }

    /// Lists the top candidates for the singles screen
    pub async fn singles(&self, user_id: i32) -> Result<Vec<Recommendation>, AppError> {
        self.recommend(user_id, RECOMMENDATION_LIMIT).await
    }

    /// Matches a user with their best candidate.
    ///
    /// Creates the match and its chat and flags both profiles as matched, all in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(UserMatch)` - The new match
    /// - `Err(AppError::NotFound)` - No candidate is available
    pub async fn auto_match(&self, user_id: i32) -> Result<UserMatch, AppError> {
        let Some(best) = self.recommend(user_id, 1).await?.into_iter().next() else {
            return Err(AppError::NotFound("No available candidates".to_string()));
        };

        let txn = self.db.begin().await?;
        let user_match = create_with_chat(&txn, user_id, best.user_id).await?;
        ProfileRepository::new(&txn)
            .set_matched(&[user_id, best.user_id], true)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Auto-matched user {} with user {} (score {:.3})",
            user_id,
            best.user_id,
            best.score
        );

        Ok(user_match)
    }

    /// Ratings as interactions, oldest match first.
    async fn interactions(&self) -> Result<Vec<Interaction>, AppError> {
        let rated = MatchRepository::new(self.db).get_rated().await?;

        let mut interactions = Vec::new();
        for user_match in rated {
            if let Some(score) = user_match.user1_rating {
                interactions.push(Interaction {
                    rater: user_match.user1.id,
                    target: user_match.user2.id,
                    score,
                });
            }
            if let Some(score) = user_match.user2_rating {
                interactions.push(Interaction {
                    rater: user_match.user2.id,
                    target: user_match.user1.id,
                    score,
                });
            }
        }

        Ok(interactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::data::chat::ChatRepository;
    use test_utils::{builder::TestBuilder, factory};

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_match_tables()
            .with_table(entity::prelude::Preference)
            .with_table(entity::prelude::UserPreference)
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_singles_filters_ineligible_users() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let (me, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (eligible, _, _) = factory::helpers::create_account(db).await.unwrap();

        let matched = factory::create_user(db).await.unwrap();
        factory::user_profile::ProfileFactory::new(db, matched.id)
            .matched(true)
            .build()
            .await
            .unwrap();

        let ghost = factory::create_user(db).await.unwrap();
        factory::create_profile(db, ghost.id).await.unwrap();
        factory::user_mode_settings::SettingsFactory::new(db, ghost.id)
            .ghost_mode(true)
            .build()
            .await
            .unwrap();

        let service_account = factory::create_user(db).await.unwrap();
        factory::user_profile::ProfileFactory::new(db, service_account.id)
            .service_account(true)
            .build()
            .await
            .unwrap();

        let inactive = factory::user::UserFactory::new(db)
            .active(false)
            .build()
            .await
            .unwrap();
        factory::create_profile(db, inactive.id).await.unwrap();

        let (partner, _, _) = factory::helpers::create_account(db).await.unwrap();
        factory::create_match(db, partner.id, me.id).await.unwrap();

        let singles = RecommendationService::new(db).singles(me.id).await.unwrap();
        let ids: Vec<i32> = singles.iter().map(|r| r.user_id).collect();

        assert_eq!(ids, vec![eligible.id]);
    }

    #[tokio::test]
    async fn test_singles_ranks_shared_preferences_first() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        let hiking = factory::preference::create_preference_named(db, "Hiking")
            .await
            .unwrap();
        let opera = factory::preference::create_preference_named(db, "Opera")
            .await
            .unwrap();

        let (me, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (hiker, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (singer, _, _) = factory::helpers::create_account(db).await.unwrap();
        factory::create_user_preference(db, me.id, hiking.id).await.unwrap();
        factory::create_user_preference(db, hiker.id, hiking.id).await.unwrap();
        factory::create_user_preference(db, singer.id, opera.id).await.unwrap();

        let singles = RecommendationService::new(db).singles(me.id).await.unwrap();

        assert_eq!(singles[0].user_id, hiker.id);
        assert_eq!(singles[0].preferences, vec!["Hiking".to_string()]);
        assert!(singles[0].score > singles[1].score);
    }

    #[tokio::test]
    async fn test_auto_match_creates_match_chat_and_flags() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        let (me, _, _) = factory::helpers::create_account(db).await.unwrap();
        let (other, _, _) = factory::helpers::create_account(db).await.unwrap();

        let service = RecommendationService::new(db);
        let user_match = service.auto_match(me.id).await.unwrap();

        assert_eq!(user_match.user1.id, me.id);
        assert_eq!(user_match.user2.id, other.id);
        assert!(ChatRepository::new(db)
            .exists_for_match(user_match.id)
            .await
            .unwrap());

        let profiles = ProfileRepository::new(db);
        assert!(profiles.find_by_user_id(me.id).await.unwrap().unwrap().is_matched);
        assert!(profiles.find_by_user_id(other.id).await.unwrap().unwrap().is_matched);

        let again = service.auto_match(me.id).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }
}
