use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context as _, Result};
use diesel::connection::SimpleConnection;
use diesel::{Connection, QueryResult, SqliteConnection};
use diesel_derive_newtype::DieselNewType;
use serde::{Deserialize, Serialize};
use teloxide::types::UserId;


/// Statements creating every table, each guarded by `IF NOT EXISTS`.
const CREATE_TABLES: &str = include_str!("../sql/create_tables.sql");

#[cfg(test)]
const IN_MEMORY: &str = ":memory:";

type SqliteTransactionManager =
    <SqliteConnection as Connection>::TransactionManager;

/// Create all tables that do not exist yet. Existing tables and their rows
/// are left untouched, so calling this repeatedly is harmless.
pub fn create_tables(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(CREATE_TABLES)
}

/// The process-wide storage handle.
///
/// Holds one shared connection to a single SQLite file. Bot handlers go
/// through [`Database::conn`], [`Database::transaction`] or, from async
/// code, [`Database::run`]. Independent connections to the same file can
/// be obtained with [`Database::session`].
pub struct Database {
    url: String,
    conn: Mutex<SqliteConnection>,
}

impl Database {
    /// Open the database at `path`, creating the file and its parent
    /// directories if missing. Tables are not created, see [`Self::init`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) =
            path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory {}", parent.display())
            })?;
        }
        let url = path
            .to_str()
            .ok_or_else(|| {
                anyhow::anyhow!("Non UTF-8 database path: {}", path.display())
            })?
            .to_string();
        let db = Self::establish(url)?;
        log::info!("Opened database {}", db.url);
        Ok(db)
    }

    /// Open a private in-memory database. Every [`Self::session`] of such a
    /// database gets its own, empty, in-memory database.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::establish(IN_MEMORY.to_string())
    }

    fn establish(url: String) -> Result<Self> {
        let conn = SqliteConnection::establish(&url)
            .with_context(|| format!("Failed to open database {url}"))?;
        Ok(Self { url, conn: Mutex::new(conn) })
    }

    /// Location of the backing storage as passed to SQLite.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Create all declared tables that do not exist yet.
    pub fn init(&self) -> QueryResult<()> {
        self.transaction(create_tables)
    }

    /// Lock the shared connection.
    ///
    /// A panic while the lock was held does not disable the handle: the lock
    /// is recovered and a transaction left open by the panicking caller is
    /// rolled back.
    pub fn conn(&self) -> MutexGuard<'_, SqliteConnection> {
        self.conn.lock().unwrap_or_else(|poisoned| {
            log::warn!("Recovering database connection after a panic");
            self.conn.clear_poison();
            let mut conn = PoisonError::into_inner(poisoned);
            rollback_abandoned(&mut *conn);
            conn
        })
    }

    pub fn transaction<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    ) -> QueryResult<T> {
        self.conn().exclusive_transaction(f)
    }

    /// Run `f` against the shared connection on the blocking thread pool.
    pub async fn run<T, F>(self: &Arc<Self>, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(self);
        let result =
            tokio::task::spawn_blocking(move || f(&mut *db.conn())).await?;
        Ok(result?)
    }

    /// Open a new connection to the same storage location.
    #[cfg(test)]
    pub fn session(&self) -> Result<SqliteConnection> {
        SqliteConnection::establish(&self.url)
            .with_context(|| format!("Failed to open database {}", self.url))
    }
}

/// Roll back transactions a panicking caller left open on `conn`.
fn rollback_abandoned(conn: &mut SqliteConnection) {
    use diesel::connection::TransactionManager as _;

    while SqliteTransactionManager::is_broken_transaction_manager(conn) {
        if let Err(e) = SqliteTransactionManager::rollback_transaction(conn) {
            log::error!("Failed to roll back abandoned transaction: {e}");
            break;
        }
    }
}

macro_rules! make_db_newtype {
    ($name:ident, $inner:ty, $doc:literal) => {
        #[derive(
            Copy,
            Clone,
            Debug,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Serialize,
            Deserialize,
            DieselNewType,
        )]
        #[doc = $doc]
        pub struct $name(pub $inner);
    };
}

make_db_newtype!(DbUserId, i64, "A Telegram user id as stored in `tg_id`.");
make_db_newtype!(DbEventId, i64, "Primary key of the `event` table.");
make_db_newtype!(DbPerformerId, i64, "Primary key of the `performers` table.");

impl From<UserId> for DbUserId {
    fn from(id: UserId) -> Self {
        Self(id.0.try_into().expect("UserId is too big"))
    }
}

impl From<DbUserId> for UserId {
    fn from(id: DbUserId) -> Self {
        Self(id.0.try_into().expect("DbUserId is negative"))
    }
}
