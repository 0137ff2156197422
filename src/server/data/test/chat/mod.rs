use crate::server::{data::chat::ChatRepository, model::user_match::MatchRef};
use entity::status::ChatStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_for_user;
mod update_status;
