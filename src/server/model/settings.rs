//! Mode settings domain models.

use crate::model::settings::{SettingsDto, UpdateSettingsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub user_id: i32,
    pub ghost_mode_enabled: bool,
    pub daily_reminders_enabled: bool,
    pub location_sharing_enabled: bool,
    pub spotmatch_notifications_enabled: bool,
}

impl Settings {
    pub fn into_dto(self) -> SettingsDto {
        SettingsDto {
            ghost_mode_enabled: self.ghost_mode_enabled,
            daily_reminders_enabled: self.daily_reminders_enabled,
            location_sharing_enabled: self.location_sharing_enabled,
            spotmatch_notifications_enabled: self.spotmatch_notifications_enabled,
        }
    }

    pub fn from_entity(entity: entity::user_mode_settings::Model) -> Self {
        Self {
            user_id: entity.user_id,
            ghost_mode_enabled: entity.ghost_mode_enabled,
            daily_reminders_enabled: entity.daily_reminders_enabled,
            location_sharing_enabled: entity.location_sharing_enabled,
            spotmatch_notifications_enabled: entity.spotmatch_notifications_enabled,
        }
    }
}

/// Partial settings update. `None` leaves a flag unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSettingsParam {
    pub ghost_mode_enabled: Option<bool>,
    pub daily_reminders_enabled: Option<bool>,
    pub location_sharing_enabled: Option<bool>,
    pub spotmatch_notifications_enabled: Option<bool>,
}

impl UpdateSettingsParam {
    pub fn from_dto(dto: UpdateSettingsDto) -> Self {
        Self {
            ghost_mode_enabled: dto.ghost_mode_enabled,
            daily_reminders_enabled: dto.daily_reminders_enabled,
            location_sharing_enabled: dto.location_sharing_enabled,
            spotmatch_notifications_enabled: dto.spotmatch_notifications_enabled,
        }
    }
}
