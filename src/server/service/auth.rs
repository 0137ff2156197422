//! Registration, login and opaque token handling.
//!
//! Tokens are 48 random bytes encoded as unpadded URL-safe base64. Only the SHA-256 hex
//! digest of a token is stored, so a leaked database cannot be replayed against the API.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use rand::RngCore;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use sha2::{Digest, Sha256};

use crate::server::{
    data::{
        preference::PreferenceRepository, profile::ProfileRepository,
        settings::SettingsRepository, token::TokenRepository, user::UserRepository,
        user_preference::UserPreferenceRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthSession, LoginParam, RegisterParam},
        token::{CreateTokenParam, IssuedToken, Token},
        user::{CreateUserParam, User},
    },
};

/// Number of random bytes in a plaintext token.
const TOKEN_BYTES: usize = 48;

#[cfg(not(test))]
const PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const PASSWORD_HASH_COST: u32 = 4;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    token_valid_days: i64,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `token_valid_days` - Lifetime of newly issued tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, token_valid_days: i64) -> Self {
        Self {
            db,
            token_valid_days,
        }
    }

    /// Creates an account and issues its first token.
    ///
    /// The user, profile, settings, preference links and token are written in one
    /// transaction.
    ///
    /// # Arguments
    /// - `param` - Validated registration input
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Issued token and the new profile
    /// - `Err(AppError::BadRequest)` - Email or phone already taken, or an unknown preference
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<AuthSession, AppError> {
        let users = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if users.email_exists(email).await? {
                return Err(AppError::BadRequest(
                    "email: a user with this email already exists".to_string(),
                ));
            }
        }
        if let Some(phone) = &param.phone_number {
            if users.phone_exists(phone).await? {
                return Err(AppError::BadRequest(
                    "phone_number: a user with this phone number already exists".to_string(),
                ));
            }
        }

        let known = PreferenceRepository::new(self.db)
            .get_existing_ids(&param.preference_ids)
            .await?;
        if known.len() != param.preference_ids.len() {
            return Err(AppError::BadRequest(
                "preferences: unknown preference id".to_string(),
            ));
        }

        let password_hash = hash_password(param.password.clone()).await?;
        let username = param.username();

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                email: param.email,
                phone_number: param.phone_number,
                username,
                password_hash,
                provider: param.provider,
                provider_id: param.provider_id,
                ..Default::default()
            })
            .await?;
        let profile = ProfileRepository::new(&txn)
            .create(user.id, param.profile)
            .await?;
        SettingsRepository::new(&txn).create(user.id).await?;
        UserPreferenceRepository::new(&txn)
            .create_many(user.id, &param.preference_ids)
            .await?;
        let issued = issue_token(&txn, user.id, "register", self.token_valid_days).await?;

        txn.commit().await?;

        tracing::info!("Registered user {}", user.id);

        Ok(AuthSession { issued, profile })
    }

    /// Checks credentials and issues a new token.
    ///
    /// The user is looked up by email first, then by phone number.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Issued token and the caller's profile
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Right password for an inactive account
    pub async fn login(&self, param: LoginParam) -> Result<AuthSession, AppError> {
        let users = UserRepository::new(self.db);

        let mut user = None;
        if let Some(email) = &param.email {
            user = users.find_by_email(email).await?;
        }
        if user.is_none() {
            if let Some(phone) = &param.phone_number {
                user = users.find_by_phone(phone).await?;
            }
        }
        let Some(user) = user else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(param.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        let profile = match ProfileRepository::new(self.db).find_by_user_id(user.id).await? {
            Some(profile) => profile,
            None => {
                ProfileRepository::new(self.db)
                    .create(user.id, Default::default())
                    .await?
            }
        };
        let issued = issue_token(self.db, user.id, "login", self.token_valid_days).await?;

        Ok(AuthSession { issued, profile })
    }

    /// Revokes a token.
    pub async fn logout(&self, token_id: i32) -> Result<(), AppError> {
        TokenRepository::new(self.db).revoke(token_id).await?;

        Ok(())
    }

    /// Lists a user's tokens, newest first.
    pub async fn get_tokens(&self, user_id: i32) -> Result<Vec<Token>, AppError> {
        Ok(TokenRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Resolves a plaintext token to its owner.
    ///
    /// # Arguments
    /// - `plaintext` - Token as presented by the client
    ///
    /// # Returns
    /// - `Ok((User, Token))` - Owner and stored token metadata
    /// - `Err(AuthError::InvalidToken)` - Unknown, revoked or expired token
    /// - `Err(AuthError::UserInactive)` - The owner has been deactivated
    pub async fn verify_token(&self, plaintext: &str) -> Result<(User, Token), AppError> {
        let Some(token) = TokenRepository::new(self.db)
            .find_unrevoked_by_hash(&hash_token(plaintext))
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        if token.expires_at < Utc::now() {
            return Err(AuthError::InvalidToken.into());
        }

        let Some(user) = UserRepository::new(self.db).find_by_id(token.user_id).await? else {
            return Err(AuthError::InvalidToken.into());
        };
        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        Ok((user, token))
    }
}

/// Generates a new plaintext token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

/// Hex encoded SHA-256 digest of a plaintext token.
pub fn hash_token(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

/// Creates and stores a token for `user_id`, returning the plaintext once.
pub async fn issue_token<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    name: &str,
    valid_days: i64,
) -> Result<IssuedToken, DbErr> {
    let plaintext = generate_token();
    let token = TokenRepository::new(db)
        .create(CreateTokenParam {
            user_id,
            key_hash: hash_token(&plaintext),
            name: name.to_string(),
            expires_at: Utc::now() + Duration::days(valid_days),
        })
        .await?;

    Ok(IssuedToken { plaintext, token })
}

async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored bcrypt hash. A malformed hash never matches.
async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))
}
