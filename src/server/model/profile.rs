//! Profile domain models and parameters.
//!
//! A profile is the public face of an account. The representation joins the profile
//! row with the owning user's username and email. Parameter types carry the validation
//! rules shared by registration and profile updates.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::profile::{ProfileDto, UpdateProfileDto},
    server::{
        error::AppError,
        util::{
            date::{age_on, parse_date_of_birth},
            url::is_http_url,
        },
    },
};

/// Youngest age accepted at registration or on profile update.
pub const MINIMUM_AGE: i32 = 13;

/// Profile joined with the account fields shown alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: i32,
    pub username: String,
    pub email: Option<String>,
    /// Activation flag of the owning account.
    pub is_active: bool,
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
    pub external_id: String,
    pub is_service_account: bool,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Converts the profile domain model to a DTO for API responses.
    ///
    /// Identity provider fields stay server-side.
    ///
    /// # Returns
    /// - `ProfileDto` - The converted profile DTO
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            nickname: self.nickname,
            teaser_description: self.teaser_description,
            profile_photo_url: self.profile_photo_url,
            verification_video_url: self.verification_video_url,
            is_verified: self.is_verified,
            total_xp: self.total_xp,
            is_matched: self.is_matched,
            date_of_birth: self.date_of_birth,
            home_latitude: self.home_latitude,
            home_longitude: self.home_longitude,
        }
    }

    /// Builds the domain model from a user row and its profile row.
    ///
    /// # Arguments
    /// - `user` - The owning user entity
    /// - `profile` - The profile entity
    ///
    /// # Returns
    /// - `Profile` - The joined domain model
    pub fn from_entities(user: entity::user::Model, profile: entity::user_profile::Model) -> Self {
        Self {
            user_id: profile.user_id,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
            full_name: profile.full_name,
            nickname: profile.nickname,
            teaser_description: profile.teaser_description,
            profile_photo_url: profile.profile_photo_url,
            verification_video_url: profile.verification_video_url,
            is_verified: profile.is_verified,
            total_xp: profile.total_xp,
            is_matched: profile.is_matched,
            date_of_birth: profile.date_of_birth,
            home_latitude: profile.home_latitude,
            home_longitude: profile.home_longitude,
            external_id: profile.external_id,
            is_service_account: profile.is_service_account,
            updated_at: profile.updated_at,
        }
    }
}

/// Initial profile values written when an account is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateProfileParam {
    pub full_name: String,
    pub nickname: String,
    pub teaser_description: String,
    pub profile_photo_url: String,
    pub verification_video_url: String,
    pub date_of_birth: Option<NaiveDate>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
    pub external_id: String,
    pub is_service_account: bool,
}

/// Partial profile update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParam {
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub teaser_description: Option<String>,
    pub profile_photo_url: Option<String>,
    pub verification_video_url: Option<String>,
    pub is_matched: Option<bool>,
    pub date_of_birth: Option<NaiveDate>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
}

impl UpdateProfileParam {
    /// Validates an update request.
    ///
    /// # Arguments
    /// - `dto` - The request body
    /// - `today` - Date used for the minimum age check
    ///
    /// # Returns
    /// - `Ok(UpdateProfileParam)` - Validated update
    /// - `Err(AppError::BadRequest)` - A URL, date of birth or coordinate is invalid
    pub fn from_dto(dto: UpdateProfileDto, today: NaiveDate) -> Result<Self, AppError> {
        let date_of_birth = match dto.date_of_birth {
            Some(value) => validate_date_of_birth(&value, today)?,
            None => None,
        };

        Ok(Self {
            full_name: dto.full_name,
            nickname: dto.nickname,
            teaser_description: dto.teaser_description,
            profile_photo_url: dto
                .profile_photo_url
                .map(|url| validate_media_url("profile_photo_url", url))
                .transpose()?,
            verification_video_url: dto
                .verification_video_url
                .map(|url| validate_media_url("verification_video_url", url))
                .transpose()?,
            is_matched: dto.is_matched,
            date_of_birth,
            home_latitude: dto.home_latitude.map(validate_latitude).transpose()?,
            home_longitude: dto.home_longitude.map(validate_longitude).transpose()?,
        })
    }
}

/// Trims a media URL, keeping blank as blank and rejecting anything but http(s).
pub fn validate_media_url(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() || is_http_url(&value) {
        Ok(value)
    } else {
        Err(AppError::BadRequest(format!("{}: enter a valid URL", field)))
    }
}

/// Parses a date of birth and enforces the minimum age.
///
/// # Returns
/// - `Ok(None)` - Blank input
/// - `Ok(Some(date))` - Parsed and old enough
/// - `Err(AppError::BadRequest)` - Unparseable, or younger than [`MINIMUM_AGE`]
pub fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<Option<NaiveDate>, AppError> {
    if value.trim().is_empty() {
        return Ok(None);
    }

    let Some(date) = parse_date_of_birth(value) else {
        return Err(AppError::BadRequest(
            "date_of_birth: unrecognised date format".to_string(),
        ));
    };

    if age_on(date, today) < MINIMUM_AGE {
        return Err(AppError::BadRequest(format!(
            "date_of_birth: you must be at least {} years old",
            MINIMUM_AGE
        )));
    }

    Ok(Some(date))
}

pub fn validate_latitude(value: f64) -> Result<f64, AppError> {
    if (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::BadRequest(
            "home_latitude: must be between -90 and 90".to_string(),
        ))
    }
}

pub fn validate_longitude(value: f64) -> Result<f64, AppError> {
    if (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::BadRequest(
            "home_longitude: must be between -180 and 180".to_string(),
        ))
    }
}
