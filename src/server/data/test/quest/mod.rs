use crate::server::{
    data::quest::QuestRepository,
    model::{
        quest::{CreateQuestParam, UpdateQuestParam},
        user_match::MatchSide,
    },
};
use chrono::{Duration, NaiveDate, Utc};
use entity::status::ProgressStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim_xp_award;
mod create;
mod get_for_user;
mod update;
