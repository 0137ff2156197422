//! Request and response DTOs shared by the HTTP and WebSocket surfaces.

pub mod api;
pub mod auth;
pub mod chat;
pub mod message;
pub mod preference;
pub mod profile;
pub mod quest;
pub mod recommendation;
pub mod settings;
pub mod status;
pub mod task;
pub mod user;
pub mod user_match;
