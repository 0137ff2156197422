//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every repository is
//! generic over [`sea_orm::ConnectionTrait`] so services can run several of them inside one
//! transaction.

pub mod chat;
pub mod message;
pub mod preference;
pub mod profile;
pub mod quest;
pub mod settings;
pub mod task;
pub mod token;
pub mod user;
pub mod user_match;
pub mod user_preference;

#[cfg(test)]
mod test;
