use crate::server::{data::message::MessageRepository, model::message::CreateMessageParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_chat;
