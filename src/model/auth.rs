use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::profile::ProfileDto;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    /// Accepts `YYYY-MM-DD`, `DD/MM/YYYY`, `MM/DD/YYYY`, `YYYY/MM/DD` or `DD-MM-YYYY`.
    pub date_of_birth: Option<String>,
    pub teaser_description: Option<String>,
    pub profile_photo_url: Option<String>,
    pub verification_video_url: Option<String>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
    /// Preference IDs to attach to the new account.
    pub preferences: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
}

/// Issued token with the profile of its owner.
///
/// The plaintext `token` is only ever returned here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: ProfileDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}
