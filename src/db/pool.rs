//! r2d2 pool of SQLite connections.
//!
//! Every caller checks out its own connection; the guard hands it back to the
//! pool when dropped, whichever way the caller returns.

use crate::errors::AppResult;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_POOL_SIZE: u32 = 8;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

pub type DbConnection = PooledConnection<SqliteConnectionManager>;

#[derive(Clone, Debug)]
pub struct DbPool {
    pool: Pool<SqliteConnectionManager>,
}

impl DbPool {
    #[instrument]
    pub fn new(path: &str, max_size: u32) -> AppResult<Self> {
        let manager = SqliteConnectionManager::file(Path::new(path))
            .with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));

        let pool = Pool::builder()
            .max_size(max_size.max(1))
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)?;

        debug!("SQLite pool ready");
        Ok(Self { pool })
    }

    /// Check out a connection.
    pub fn get(&self) -> AppResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Run a closure against a pooled connection, releasing it afterwards.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let conn = self.get()?;
        func(&conn)
    }

    pub fn state(&self) -> r2d2::State {
        self.pool.state()
    }
}
