//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate incoming DTOs so services only ever see well-formed input.

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
pub mod token;
pub mod user;
pub mod user_match;
