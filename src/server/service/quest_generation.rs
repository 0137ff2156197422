//! Plans date quests for a match from the participants' calendars and homes.

use chrono::{Duration, NaiveDate};
use entity::status::ProgressStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        profile::ProfileRepository, quest::QuestRepository, task::TaskRepository,
        user_match::MatchRepository,
    },
    engine::quest::{
        busy_minutes, find_common_slot, minute_to_instant, nearest_places, Coordinates, Place,
        MAX_PLACES,
    },
    error::AppError,
    model::{
        quest::{CreateQuestParam, GeneratedQuests},
        user_match::MatchRef,
    },
};

pub struct QuestGenerationService<'a> {
    db: &'a DatabaseConnection,
    places: &'a [Place],
}

impl<'a> QuestGenerationService<'a> {
    /// Creates a new QuestGenerationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `places` - Place catalog quests are picked from
    ///
    /// # Returns
    /// - `QuestGenerationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, places: &'a [Place]) -> Self {
        Self { db, places }
    }

    /// Generates quests on `date` for one of the caller's matches.
    ///
    /// # Returns
    /// - `Ok(GeneratedQuests)` - The shared slot and the created quests
    /// - `Err(AppError::NotFound)` - Unknown match or the caller is not a participant
    /// - `Err(AppError::BadRequest)` - The match cannot be planned, see [`Self::generate`]
    pub async fn generate_for_match(
        &self,
        caller_id: i32,
        match_id: i32,
        date: NaiveDate,
    ) -> Result<GeneratedQuests, AppError> {
        let match_ref = MatchRepository::new(self.db)
            .find_ref(match_id)
            .await?
            .filter(|match_ref| match_ref.includes(caller_id))
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;

        self.generate(match_ref, date).await
    }

    /// Plans up to three quests for a match on `date`.
    ///
    /// The first free slot both participants share between 07:00 and 22:00 is chosen,
    /// then the places closest to both homes that the match has not visited yet.
    ///
    /// # Arguments
    /// - `match_ref` - The match to plan for
    /// - `date` - Day of the quests
    ///
    /// # Returns
    /// - `Ok(GeneratedQuests)` - The slot and the quests created, possibly none when every
    ///   place has been used already
    /// - `Err(AppError::BadRequest)` - A participant has no home location, no place is
    ///   configured, or the calendars share no free slot
    pub async fn generate(
        &self,
        match_ref: MatchRef,
        date: NaiveDate,
    ) -> Result<GeneratedQuests, AppError> {
        let home1 = self.home_of(match_ref.user1_id).await?;
        let home2 = self.home_of(match_ref.user2_id).await?;
        let (Some(home1), Some(home2)) = (home1, home2) else {
            return Err(AppError::BadRequest(
                "Both users need a home location".to_string(),
            ));
        };

        if self.places.is_empty() {
            return Err(AppError::BadRequest("No places are configured".to_string()));
        }

        let day_start = minute_to_instant(date, 0);
        let periods: Vec<_> = TaskRepository::new(self.db)
            .get_busy_between(
                &[match_ref.user1_id, match_ref.user2_id],
                day_start,
                day_start + Duration::days(1),
            )
            .await?
            .into_iter()
            .filter_map(|task| Some((task.scheduled_start_time?, task.scheduled_end_time?)))
            .collect();

        let Some((slot_start, slot_end)) = find_common_slot(&busy_minutes(&periods, date)) else {
            return Err(AppError::BadRequest(
                "No common free time slot".to_string(),
            ));
        };

        let visited = QuestRepository::new(self.db)
            .get_location_names(match_ref.id)
            .await?;
        let suggestions = nearest_places(self.places, home1, home2, &visited, MAX_PLACES);

        let txn = self.db.begin().await?;
        let repo = QuestRepository::new(&txn);
        let mut quests = Vec::with_capacity(suggestions.len());
        for suggestion in suggestions {
            let quest = repo
                .create(CreateQuestParam {
                    match_id: match_ref.id,
                    activity: suggestion.activity().to_string(),
                    xp_reward: Some(suggestion.xp_reward()),
                    location_name: suggestion.place.name,
                    quest_date: date,
                    location_latitude: Some(suggestion.place.latitude),
                    location_longitude: Some(suggestion.place.longitude),
                    hint_user1: String::new(),
                    hint_user2: String::new(),
                    status_user1: ProgressStatus::Pending,
                    status_user2: ProgressStatus::Pending,
                })
                .await?;
            quests.push(quest);
        }
        txn.commit().await?;

        Ok(GeneratedQuests {
            slot_start,
            slot_end,
            quests,
        })
    }

    /// Generates `date`'s quests for every match that has none on that day.
    ///
    /// Matches that cannot be planned are skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of quests created
    /// - `Err(AppError::DbErr)` - The list of matches could not be loaded
    pub async fn run_daily(&self, date: NaiveDate) -> Result<usize, AppError> {
        let matches = MatchRepository::new(self.db)
            .get_without_quest_on(date)
            .await?;

        let mut created = 0;
        for match_ref in matches {
            match self.generate(match_ref, date).await {
                Ok(generated) => created += generated.quests.len(),
                Err(AppError::BadRequest(reason)) => {
                    tracing::debug!("Skipping quests for match {}: {}", match_ref.id, reason);
                }
                Err(e) => {
                    tracing::error!("Failed to generate quests for match {}: {}", match_ref.id, e);
                }
            }
        }

        Ok(created)
    }

    async fn home_of(&self, user_id: i32) -> Result<Option<Coordinates>, AppError> {
        let profile = ProfileRepository::new(self.db).find_by_user_id(user_id).await?;

        Ok(profile.and_then(|profile| {
            Some(Coordinates {
                latitude: profile.home_latitude?,
                longitude: profile.home_longitude?,
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn place(name: &str, kind: &str, latitude: f64, longitude: f64) -> Place {
        Place {
            name: name.to_string(),
            kind: kind.to_string(),
            latitude,
            longitude,
        }
    }

    fn catalog() -> Vec<Place> {
        vec![
            place("Near Cafe", "Cafe", 52.5201, 13.4051),
            place("City Park", "Park", 52.5150, 13.3900),
            place("Far Cinema", "Cinema", 52.4000, 13.1000),
            place("Distant Mall", "Shopping", 52.3000, 13.0000),
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 4).unwrap()
    }

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_match_tables()
            .with_table(entity::prelude::Task)
            .build()
            .await
            .unwrap()
    }

    async fn homed_match(db: &DatabaseConnection) -> (i32, i32, i32) {
        let alice = factory::create_user(db).await.unwrap();
        let bob = factory::create_user(db).await.unwrap();
        factory::user_profile::ProfileFactory::new(db, alice.id)
            .home(52.5200, 13.4050)
            .build()
            .await
            .unwrap();
        factory::user_profile::ProfileFactory::new(db, bob.id)
            .home(52.5210, 13.4100)
            .build()
            .await
            .unwrap();
        let user_match = factory::create_match(db, alice.id, bob.id).await.unwrap();

        (alice.id, bob.id, user_match.id)
    }

    #[tokio::test]
    async fn test_generates_nearest_places_in_common_slot() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        let (alice, _bob, match_id) = homed_match(db).await;
        factory::task::TaskFactory::new(db, alice)
            .scheduled(minute_to_instant(date(), 7 * 60), minute_to_instant(date(), 10 * 60))
            .build()
            .await
            .unwrap();

        let places = catalog();
        let generated = QuestGenerationService::new(db, &places)
            .generate_for_match(alice, match_id, date())
            .await
            .unwrap();

        assert_eq!((generated.slot_start, generated.slot_end), (600, 720));
        let names: Vec<&str> = generated
            .quests
            .iter()
            .map(|quest| quest.location_name.as_str())
            .collect();
        assert_eq!(names, vec!["Near Cafe", "City Park", "Far Cinema"]);
        assert_eq!(generated.quests[0].activity, "Coffee date");
        assert_eq!(generated.quests[0].xp_reward, Some(5));
        assert_eq!(generated.quests[2].xp_reward, Some(10));
        assert_eq!(generated.quests[0].quest_date, date());
    }

    #[tokio::test]
    async fn test_skips_places_already_used() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        let (alice, _bob, match_id) = homed_match(db).await;
        factory::quest::QuestFactory::new(db, match_id)
            .location_name("Near Cafe")
            .build()
            .await
            .unwrap();

        let places = catalog();
        let generated = QuestGenerationService::new(db, &places)
            .generate_for_match(alice, match_id, date())
            .await
            .unwrap();

        assert!(generated
            .quests
            .iter()
            .all(|quest| quest.location_name != "Near Cafe"));
        assert_eq!(generated.quests.len(), 3);
    }

    #[tokio::test]
    async fn test_rejects_unplannable_matches() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        let (alice, bob, match_id) = homed_match(db).await;

        let no_places: Vec<Place> = Vec::new();
        assert!(matches!(
            QuestGenerationService::new(db, &no_places)
                .generate_for_match(alice, match_id, date())
                .await,
            Err(AppError::BadRequest(_))
        ));

        factory::task::TaskFactory::new(db, bob)
            .scheduled(minute_to_instant(date(), 6 * 60), minute_to_instant(date(), 23 * 60))
            .build()
            .await
            .unwrap();
        let places = catalog();
        assert!(matches!(
            QuestGenerationService::new(db, &places)
                .generate_for_match(alice, match_id, date())
                .await,
            Err(AppError::BadRequest(_))
        ));

        let stranger = factory::create_user(db).await.unwrap();
        assert!(matches!(
            QuestGenerationService::new(db, &places)
                .generate_for_match(stranger.id, match_id, date())
                .await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_run_daily_serves_each_match_once() {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        homed_match(db).await;
        let homeless_a = factory::create_user(db).await.unwrap();
        let homeless_b = factory::create_user(db).await.unwrap();
        factory::create_match(db, homeless_a.id, homeless_b.id)
            .await
            .unwrap();

        let places = catalog();
        let service = QuestGenerationService::new(db, &places);

        assert_eq!(service.run_daily(date()).await.unwrap(), 3);
        assert_eq!(service.run_daily(date()).await.unwrap(), 0);
    }
}
