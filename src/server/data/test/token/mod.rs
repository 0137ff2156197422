use crate::server::{data::token::TokenRepository, model::token::CreateTokenParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_unrevoked_by_hash;
mod get_by_user;
mod revoke;
