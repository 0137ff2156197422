mod chat;
mod message;
mod preference;
mod profile;
mod quest;
mod settings;
mod task;
mod token;
mod user;
mod user_match;
mod user_preference;
