use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingsDto {
    pub ghost_mode_enabled: bool,
    pub daily_reminders_enabled: bool,
    pub location_sharing_enabled: bool,
    pub spotmatch_notifications_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSettingsDto {
    pub ghost_mode_enabled: Option<bool>,
    pub daily_reminders_enabled: Option<bool>,
    pub location_sharing_enabled: Option<bool>,
    pub spotmatch_notifications_enabled: Option<bool>,
}
