//! Auth0 bearer JWT fallback.
//!
//! When a bearer value is not a known opaque token but looks like a JWT, it is validated
//! as an RS256 Auth0 access token and mapped onto a local account, creating one on first
//! sight.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::server::{
    config::Auth0Config,
    data::{
        profile::ProfileRepository, settings::SettingsRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        profile::CreateProfileParam,
        user::{CreateUserParam, User},
    },
    util::email::normalize_email,
};

/// How long a fetched key set is trusted before it is fetched again.
pub const JWKS_TTL: Duration = Duration::from_secs(60 * 60);

/// Provider name recorded on accounts created from an Auth0 identity.
const AUTH0_PROVIDER: &str = "auth0";

/// Claims read from an Auth0 access token or the `/userinfo` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Process-wide cache of the tenant's signing keys.
#[derive(Debug, Clone, Default)]
pub struct JwksCache {
    inner: Arc<RwLock<Option<(Instant, JwkSet)>>>,
}

impl JwksCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached key set, fetching it when absent, stale or when `refresh` is set.
    async fn keys(
        &self,
        http: &reqwest::Client,
        domain: &str,
        refresh: bool,
    ) -> Result<JwkSet, AuthError> {
        if !refresh {
            if let Some((fetched_at, keys)) = self.inner.read().await.as_ref() {
                if fetched_at.elapsed() < JWKS_TTL {
                    return Ok(keys.clone());
                }
            }
        }

        let url = format!("https://{}/.well-known/jwks.json", domain);
        let keys = http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AuthError::Jwt(format!("failed to fetch JWKS: {}", e)))?
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::Jwt(format!("malformed JWKS: {}", e)))?;

        tracing::debug!("Fetched {} signing keys from {}", keys.keys.len(), domain);
        *self.inner.write().await = Some((Instant::now(), keys.clone()));

        Ok(keys)
    }
}

/// Whether a bearer value has the three-segment shape of a JWT.
pub fn looks_like_jwt(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3 && segments.iter().all(|segment| !segment.is_empty())
}

/// Machine clients authenticate with a `client|` or `@clients` subject.
pub fn is_service_subject(sub: &str) -> bool {
    sub.starts_with("client|") || sub.ends_with("@clients")
}

/// Splits a display name into first and last name at the first whitespace.
fn split_name(name: &str) -> (String, String) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((first, last)) => (first.to_string(), last.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}

pub struct Auth0Service<'a> {
    db: &'a DatabaseConnection,
    http: &'a reqwest::Client,
    config: &'a Auth0Config,
    cache: &'a JwksCache,
}

impl<'a> Auth0Service<'a> {
    /// Creates a new Auth0Service instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Client used for the JWKS and `/userinfo` requests
    /// - `config` - Tenant domain and expected audience
    /// - `cache` - Shared signing key cache
    ///
    /// # Returns
    /// - `Auth0Service` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http: &'a reqwest::Client,
        config: &'a Auth0Config,
        cache: &'a JwksCache,
    ) -> Self {
        Self {
            db,
            http,
            config,
            cache,
        }
    }

    /// Validates an Auth0 access token and resolves it to a local user.
    ///
    /// # Arguments
    /// - `token` - Raw bearer JWT
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created account
    /// - `Err(AuthError::Jwt)` - Signature, issuer, audience or expiry check failed
    /// - `Err(AuthError::UserInactive)` - The mapped account is deactivated
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.validate(token).await?;
        let claims = self.fill_from_userinfo(token, claims).await;

        self.resolve_user(claims).await
    }

    /// Completes claims without an email from the `/userinfo` endpoint.
    ///
    /// Machine tokens are refused by `/userinfo`; a failed lookup is logged and the
    /// token's own claims are kept.
    pub async fn fill_from_userinfo(
        &self,
        token: &str,
        mut claims: IdentityClaims,
    ) -> IdentityClaims {
        if claims.email.as_deref().is_some_and(|email| !email.trim().is_empty()) {
            return claims;
        }

        match self.userinfo(token).await {
            Ok(info) => {
                claims.email = info.email;
                if claims.name.is_none() {
                    claims.name = info.name;
                }
            }
            Err(e) => {
                tracing::warn!("Using token claims for {}: {}", claims.sub, e);
            }
        }

        claims
    }

    async fn validate(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let header = decode_header(token).map_err(|e| AuthError::Jwt(e.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::Jwt("token header has no kid".to_string()))?;

        let mut keys = self
            .cache
            .keys(self.http, &self.config.domain, false)
            .await?;
        if keys.find(&kid).is_none() {
            // Signing keys rotate; retry once against a fresh set.
            keys = self.cache.keys(self.http, &self.config.domain, true).await?;
        }
        let jwk = keys
            .find(&kid)
            .ok_or_else(|| AuthError::Jwt(format!("unknown signing key {}", kid)))?;
        let key = DecodingKey::from_jwk(jwk).map_err(|e| AuthError::Jwt(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[format!("https://{}/", self.config.domain)]);
        validation.set_audience(&[self.config.audience.as_str()]);

        let data = decode::<IdentityClaims>(token, &key, &validation)
            .map_err(|e| AuthError::Jwt(e.to_string()))?;

        Ok(data.claims)
    }

    async fn userinfo(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let url = format!("https://{}/userinfo", self.config.domain);

        self.http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AuthError::Jwt(format!("userinfo request failed: {}", e)))?
            .json::<IdentityClaims>()
            .await
            .map_err(|e| AuthError::Jwt(format!("malformed userinfo: {}", e)))
    }

    /// Maps identity claims onto a local account.
    ///
    /// Looks the user up by email, then by profile `external_id`, and otherwise creates a
    /// user with profile and settings. An existing user without any name gets one from the
    /// `name` claim, and the subject is recorded on the profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Resolved account
    /// - `Err(AuthError::UserInactive)` - The account is deactivated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn resolve_user(&self, claims: IdentityClaims) -> Result<User, AppError> {
        let email = claims
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|email| !email.is_empty());
        let name = claims.name.clone().unwrap_or_default();
        let is_service = is_service_subject(&claims.sub);

        let users = UserRepository::new(self.db);
        let mut existing = match &email {
            Some(email) => users.find_by_email(email).await?,
            None => None,
        };
        if existing.is_none() && !claims.sub.is_empty() {
            if let Some(profile) = ProfileRepository::new(self.db)
                .find_by_external_id(&claims.sub)
                .await?
            {
                existing = users.find_by_id(profile.user_id).await?;
            }
        }

        let user = match existing {
            Some(mut user) => {
                if !user.is_active {
                    return Err(AuthError::UserInactive(user.id).into());
                }

                let full_name = format!("{} {}", user.first_name, user.last_name);
                if !name.trim().is_empty() && full_name.trim().is_empty() {
                    (user.first_name, user.last_name) = split_name(&name);
                    users
                        .update_names(user.id, user.first_name.clone(), user.last_name.clone())
                        .await?;
                }

                let profiles = ProfileRepository::new(self.db);
                if profiles.find_by_user_id(user.id).await?.is_none() {
                    profiles.create(user.id, CreateProfileParam::default()).await?;
                }
                profiles
                    .set_external_identity(user.id, claims.sub.clone(), is_service)
                    .await?;

                user
            }
            None => {
                let (first_name, last_name) = split_name(&name);
                let username = email.clone().unwrap_or_else(|| claims.sub.clone());

                let txn = self.db.begin().await?;
                let user = UserRepository::new(&txn)
                    .create(CreateUserParam {
                        email,
                        phone_number: None,
                        username,
                        password_hash: String::new(),
                        first_name,
                        last_name,
                        provider: AUTH0_PROVIDER.to_string(),
                        provider_id: claims.sub.clone(),
                    })
                    .await?;
                ProfileRepository::new(&txn)
                    .create(
                        user.id,
                        CreateProfileParam {
                            full_name: name.trim().to_string(),
                            external_id: claims.sub.clone(),
                            is_service_account: is_service,
                            ..Default::default()
                        },
                    )
                    .await?;
                SettingsRepository::new(&txn).create(user.id).await?;
                txn.commit().await?;

                tracing::info!("Created user {} for identity {}", user.id, claims.sub);

                user
            }
        };

        Ok(user)
    }
}
