//! Common helpers to be used by various bot modules.

use std::sync::Arc;

use crate::config::Config;
use crate::db::Database;

/// Wrapper around [`teloxide::dispatching::UpdateHandler`] to be used in this
/// crate.
pub type UpdateHandler = teloxide::dispatching::UpdateHandler<anyhow::Error>;

/// Bot environment: global state shared between all handlers.
pub struct BotEnv {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
}
