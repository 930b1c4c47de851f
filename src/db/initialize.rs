use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine, so it
/// is safe to call on every startup.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    run_pending_migrations(conn)
}

/// Open (creating parent directories if needed) a pool on `path` and bring
/// its schema up to date.
pub fn open_pool(path: &str, pool_size: u32) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(path, pool_size)?;
    pool.with_conn(init_db)?;
    Ok(pool)
}
