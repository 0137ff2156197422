//! HTTP and WebSocket request handlers.
//!
//! Controllers authenticate the caller, convert DTOs into parameters, call a service and
//! convert the returned domain model back into a DTO. They carry no business rules.

pub mod auth;
pub mod chat;
pub mod message;
pub mod preference;
pub mod profile;
pub mod quest;
pub mod recommendation;
pub mod settings;
pub mod task;
pub mod user_match;
pub mod websocket;

#[cfg(test)]
mod test;
