pub use super::chat::Entity as Chat;
pub use super::expiring_token::Entity as ExpiringToken;
pub use super::message::Entity as Message;
pub use super::preference::Entity as Preference;
pub use super::quest::Entity as Quest;
pub use super::task::Entity as Task;
pub use super::user::Entity as User;
pub use super::user_match::Entity as UserMatch;
pub use super::user_mode_settings::Entity as UserModeSettings;
pub use super::user_preference::Entity as UserPreference;
pub use super::user_profile::Entity as UserProfile;
