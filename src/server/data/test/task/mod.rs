use crate::server::{
    data::task::TaskRepository,
    model::task::{CreateTaskParam, UpdateTaskParam},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_for_user;
mod get_busy_between;
mod update;
