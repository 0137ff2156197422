//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Keeping multi-row side effects such as a match and its
//!   chat inside one transaction

pub mod auth;
pub mod auth0;
pub mod chat;
pub mod message;
pub mod preference;
pub mod profile;
pub mod quest;
pub mod quest_generation;
pub mod recommendation;
pub mod settings;
pub mod task;
pub mod user_match;
