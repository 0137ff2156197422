use crate::server::{
    data::user_match::MatchRepository,
    model::user_match::{CreateMatchParam, MatchSide, UpdateMatchParam},
};
use chrono::{Duration, Utc};
use entity::status::ProgressStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_between;
mod get_for_user;
mod get_rated;
mod get_without_quest_on;
mod update;
