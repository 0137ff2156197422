use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user_id: i32,
    pub username: String,
    pub email: Option<String>,
    pub full_name: String,
    pub nickname: String,
    pub teaser_description: String,
    pub profile_photo_url: String,
    pub verification_video_url: String,
    pub is_verified: bool,
    pub total_xp: i32,
    pub is_matched: bool,
    pub date_of_birth: Option<NaiveDate>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub teaser_description: Option<String>,
    pub profile_photo_url: Option<String>,
    pub verification_video_url: Option<String>,
    pub is_matched: Option<bool>,
    /// Same formats as registration.
    pub date_of_birth: Option<String>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
}
