//! Registration and login parameters.
//!
//! Both carry identifiers already normalised: emails are trimmed and lowercased, phone
//! numbers are trimmed, and blank values become `None`.

use chrono::NaiveDate;

use crate::{
    model::auth::{AuthResponseDto, LoginDto, RegisterDto},
    server::{
        error::AppError,
        model::{
            profile::{
                validate_date_of_birth, validate_latitude, validate_longitude, validate_media_url,
                CreateProfileParam, Profile,
            },
            token::IssuedToken,
        },
        util::email::{is_valid_email, normalize_email},
    },
};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest phone number accepted.
pub const MAX_PHONE_LENGTH: usize = 20;

/// Provider recorded when registration does not name one.
pub const DEFAULT_PROVIDER: &str = "email";

/// Validated registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterParam {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
    pub provider: String,
    pub provider_id: String,
    pub profile: CreateProfileParam,
    pub preference_ids: Vec<i32>,
}

impl RegisterParam {
    /// Validates a registration request.
    ///
    /// Uniqueness of the email and phone number is checked by the service since it
    /// needs the database.
    ///
    /// # Arguments
    /// - `dto` - The request body
    /// - `today` - Date used for the minimum age check
    ///
    /// # Returns
    /// - `Ok(RegisterParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - The first field that failed validation
    pub fn from_dto(dto: RegisterDto, today: NaiveDate) -> Result<Self, AppError> {
        let (email, phone_number) = identifiers(dto.email, dto.phone_number)?;

        if let Some(email) = &email {
            if !is_valid_email(email) {
                return Err(AppError::BadRequest(
                    "email: enter a valid email address".to_string(),
                ));
            }
        }

        if let Some(phone) = &phone_number {
            if phone.chars().count() > MAX_PHONE_LENGTH {
                return Err(AppError::BadRequest(format!(
                    "phone_number: ensure this field has no more than {} characters",
                    MAX_PHONE_LENGTH
                )));
            }
        }

        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "password: ensure this field has at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let date_of_birth = match dto.date_of_birth {
            Some(value) => validate_date_of_birth(&value, today)?,
            None => None,
        };

        let profile = CreateProfileParam {
            full_name: dto.full_name.unwrap_or_default(),
            nickname: dto.nickname.unwrap_or_default(),
            teaser_description: dto.teaser_description.unwrap_or_default(),
            profile_photo_url: validate_media_url(
                "profile_photo_url",
                dto.profile_photo_url.unwrap_or_default(),
            )?,
            verification_video_url: validate_media_url(
                "verification_video_url",
                dto.verification_video_url.unwrap_or_default(),
            )?,
            date_of_birth,
            home_latitude: dto.home_latitude.map(validate_latitude).transpose()?,
            home_longitude: dto.home_longitude.map(validate_longitude).transpose()?,
            ..Default::default()
        };

        let provider = dto
            .provider
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

        let mut preference_ids = dto.preferences.unwrap_or_default();
        preference_ids.sort_unstable();
        preference_ids.dedup();

        Ok(Self {
            email,
            phone_number,
            password: dto.password,
            provider,
            provider_id: dto.provider_id.unwrap_or_default(),
            profile,
            preference_ids,
        })
    }

    /// Username stored for the account: the email, else the phone number.
    pub fn username(&self) -> String {
        self.email
            .clone()
            .or_else(|| self.phone_number.clone())
            .unwrap_or_default()
    }
}

/// Validated login request.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginParam {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let (email, phone_number) = identifiers(dto.email, dto.phone_number)?;

        Ok(Self {
            email,
            phone_number,
            password: dto.password,
        })
    }
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub issued: IssuedToken,
    pub profile: Profile,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.issued.plaintext,
            expires_at: self.issued.token.expires_at,
            user: self.profile.into_dto(),
        }
    }
}

/// Normalises the identifier pair and requires at least one of them.
fn identifiers(
    email: Option<String>,
    phone_number: Option<String>,
) -> Result<(Option<String>, Option<String>), AppError> {
    let email = email.map(|e| normalize_email(&e)).filter(|e| !e.is_empty());
    let phone_number = phone_number
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    if email.is_none() && phone_number.is_none() {
        return Err(AppError::BadRequest(
            "email or phone_number is required".to_string(),
        ));
    }

    Ok((email, phone_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn register(email: Option<&str>, phone: Option<&str>, password: &str) -> RegisterDto {
        RegisterDto {
            email: email.map(str::to_string),
            phone_number: phone.map(str::to_string),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_normalises_email_and_defaults_provider() {
        let param =
            RegisterParam::from_dto(register(Some(" Bob@Example.com "), None, "password1"), today())
                .unwrap();

        assert_eq!(param.email.as_deref(), Some("bob@example.com"));
        assert_eq!(param.provider, "email");
        assert_eq!(param.username(), "bob@example.com");
    }

    #[test]
    fn test_register_uses_phone_as_username_without_email() {
        let param =
            RegisterParam::from_dto(register(Some("  "), Some(" +15550001 "), "password1"), today())
                .unwrap();

        assert_eq!(param.email, None);
        assert_eq!(param.username(), "+15550001");
    }

    #[test]
    fn test_register_requires_an_identifier() {
        let result = RegisterParam::from_dto(register(None, None, "password1"), today());
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let result = RegisterParam::from_dto(register(Some("a@b.co"), None, "short"), today());
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_register_rejects_malformed_email_and_long_phone() {
        assert!(RegisterParam::from_dto(register(Some("nope"), None, "password1"), today()).is_err());
        assert!(RegisterParam::from_dto(
            register(None, Some("123456789012345678901"), "password1"),
            today()
        )
        .is_err());
    }

    #[test]
    fn test_register_dedups_preferences() {
        let mut dto = register(Some("a@b.co"), None, "password1");
        dto.preferences = Some(vec![3, 1, 3]);

        let param = RegisterParam::from_dto(dto, today()).unwrap();

        assert_eq!(param.preference_ids, vec![1, 3]);
    }

    #[test]
    fn test_login_requires_an_identifier() {
        let result = LoginParam::from_dto(LoginDto {
            email: Some(" ".to_string()),
            phone_number: None,
            password: "x".to_string(),
        });
        assert!(result.is_err());
    }
}
