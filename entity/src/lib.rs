//! SeaORM entity models for the Cupid database schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations are declared
//! from the child side (`belongs_to`) so joins such as "chats of the matches a user takes
//! part in" can be expressed with `inner_join`.

pub mod prelude;

pub mod chat;
pub mod expiring_token;
pub mod message;
pub mod preference;
pub mod quest;
pub mod status;
pub mod task;
pub mod user;
pub mod user_match;
pub mod user_mode_settings;
pub mod user_preference;
pub mod user_profile;
