//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with the profile and settings rows registration would create.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, profile, settings))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_account(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user_profile::Model,
        entity::user_mode_settings::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::user_profile::create_profile(db, user.id).await?;
    let settings = crate::factory::user_mode_settings::create_settings(db, user.id).await?;

    Ok((user, profile, settings))
}

/// Creates two users, a match between them and the match's chat.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user1, user2, user_match, chat))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_chat(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::user_match::Model,
        entity::chat::Model,
    ),
    DbErr,
> {
    let user1 = crate::factory::user::create_user(db).await?;
    let user2 = crate::factory::user::create_user(db).await?;
    let user_match = crate::factory::user_match::create_match(db, user1.id, user2.id).await?;
    let chat = crate::factory::chat::create_chat(db, user_match.id).await?;

    Ok((user1, user2, user_match, chat))
}
