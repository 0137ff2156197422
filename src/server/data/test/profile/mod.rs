use crate::server::{
    data::profile::ProfileRepository,
    model::profile::{CreateProfileParam, UpdateProfileParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_xp;
mod create;
mod find_by_external_id;
mod update;
