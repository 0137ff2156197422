use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimal user reference embedded in matches and messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub email: Option<String>,
}
