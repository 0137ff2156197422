//! Background cron jobs started alongside the HTTP server.

pub mod quest_generation;
