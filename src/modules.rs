//! Modules that define the bot's functionality.

pub mod basic;
pub mod user_tracker;
