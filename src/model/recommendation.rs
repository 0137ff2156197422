use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A candidate partner ranked by similarity to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationDto {
    pub user_id: i32,
    pub username: String,
    pub full_name: String,
    pub preferences: Vec<String>,
    pub score: f64,
}
