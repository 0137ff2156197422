//! Conversions between stored status enums and their API representation.

use entity::status::{ChatStatus, ProgressStatus};

use crate::model::status::{ChatStatusDto, ProgressStatusDto};

impl From<ProgressStatus> for ProgressStatusDto {
    fn from(status: ProgressStatus) -> Self {
        match status {
            ProgressStatus::Pending => Self::Pending,
            ProgressStatus::Completed => Self::Completed,
        }
    }
}

impl From<ProgressStatusDto> for ProgressStatus {
    fn from(status: ProgressStatusDto) -> Self {
        match status {
            ProgressStatusDto::Pending => Self::Pending,
            ProgressStatusDto::Completed => Self::Completed,
        }
    }
}

impl From<ChatStatus> for ChatStatusDto {
    fn from(status: ChatStatus) -> Self {
        match status {
            ChatStatus::Active => Self::Active,
            ChatStatus::Closed => Self::Closed,
        }
    }
}

impl From<ChatStatusDto> for ChatStatus {
    fn from(status: ChatStatusDto) -> Self {
        match status {
            ChatStatusDto::Active => Self::Active,
            ChatStatusDto::Closed => Self::Closed,
        }
    }
}
