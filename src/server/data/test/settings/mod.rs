use crate::server::{data::settings::SettingsRepository, model::settings::UpdateSettingsParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_ghost_user_ids;
mod get_or_create;
mod update;
