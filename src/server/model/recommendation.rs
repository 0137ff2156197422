//! Ranked partner suggestions.

use crate::{model::recommendation::RecommendationDto, server::model::profile::Profile};

/// A candidate partner with the caller's similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub user_id: i32,
    pub username: String,
    pub full_name: String,
    /// Names of the candidate's preferences, alphabetical.
    pub preferences: Vec<String>,
    pub score: f64,
}

impl Recommendation {
    pub fn into_dto(self) -> RecommendationDto {
        RecommendationDto {
            user_id: self.user_id,
            username: self.username,
            full_name: self.full_name,
            preferences: self.preferences,
            score: self.score,
        }
    }

    pub fn from_profile(profile: &Profile, preferences: Vec<String>, score: f64) -> Self {
        Self {
            user_id: profile.user_id,
            username: profile.username.clone(),
            full_name: profile.full_name.clone(),
            preferences,
            score,
        }
    }
}
