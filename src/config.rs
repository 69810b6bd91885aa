use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    pub telegram: Telegram,
    /// Path to the SQLite database file.
    #[serde(default = "default_db")]
    pub db: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Telegram {
    pub token: String,
}

fn default_db() -> String {
    "database/db.sqlite3".to_string()
}
