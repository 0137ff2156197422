//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as constructor
//! arguments and leave every other column at a default that can be overridden.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a match between two fresh users together with its chat
//!     let (user1, user2, user_match, chat) =
//!         factory::helpers::create_match_with_chat(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("alice@example.com")
//!     .password_hash(hash)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `user_profile` - Create profile rows for existing users
//! - `user_mode_settings` - Create settings rows for existing users
//! - `expiring_token` - Create API token rows
//! - `task` - Create calendar task entities
//! - `user_match` - Create matches between two users
//! - `quest` - Create quests attached to a match
//! - `chat` - Create the chat for a match
//! - `message` - Create chat messages
//! - `preference` - Create preference catalog entries
//! - `user_preference` - Link users to preferences
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod chat;
pub mod expiring_token;
pub mod helpers;
pub mod message;
pub mod preference;
pub mod quest;
pub mod task;
pub mod user;
pub mod user_match;
pub mod user_mode_settings;
pub mod user_preference;
pub mod user_profile;

pub use chat::create_chat;
pub use expiring_token::create_token;
pub use message::create_message;
pub use preference::create_preference;
pub use quest::create_quest;
pub use task::create_task;
pub use user::create_user;
pub use user_match::create_match;
pub use user_mode_settings::create_settings;
pub use user_preference::create_user_preference;
pub use user_profile::create_profile;
