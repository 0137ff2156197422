use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_VALID_DAYS: i64 = 365;
const DEFAULT_QUEST_CRON: &str = "0 0 6 * * *";
const DEFAULT_AUTH_RATE_PER_SECOND: u64 = 2;
const DEFAULT_AUTH_RATE_BURST: u32 = 10;

/// Auth0 tenant used to validate external bearer JWTs.
#[derive(Debug, Clone)]
pub struct Auth0Config {
    /// Tenant domain, e.g. `example.eu.auth0.com`.
    pub domain: String,
    /// Expected `aud` claim.
    pub audience: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub token_valid_days: i64,
    pub auth0: Option<Auth0Config>,

    pub redis_url: Option<String>,
    pub allowed_origins: Option<Vec<String>>,

    pub places_file: Option<String>,
    pub quest_cron: String,

    pub auth_rate_per_second: u64,
    pub auth_rate_burst: u32,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Only `DATABASE_URL` is required. Blank optional variables count as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A numeric variable failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        let auth0 = match (optional("AUTH0_DOMAIN"), optional("AUTH0_AUDIENCE")) {
            (Some(domain), Some(audience)) => Some(Auth0Config { domain, audience }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            token_valid_days: parse_or("TOKEN_VALID_DAYS", DEFAULT_TOKEN_VALID_DAYS)?,
            auth0,
            redis_url: optional("REDIS_URL"),
            allowed_origins: optional("ALLOWED_ORIGINS").map(|origins| split_list(&origins)),
            places_file: optional("PLACES_FILE"),
            quest_cron: optional("QUEST_CRON").unwrap_or_else(|| DEFAULT_QUEST_CRON.to_string()),
            auth_rate_per_second: parse_or("AUTH_RATE_PER_SECOND", DEFAULT_AUTH_RATE_PER_SECOND)?,
            auth_rate_burst: parse_or("AUTH_RATE_BURST", DEFAULT_AUTH_RATE_BURST)?,
        })
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), value)),
        None => Ok(default),
    }
}

/// Splits a comma separated list, dropping blank entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
