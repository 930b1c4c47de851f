//! The log store service: create, list and aggregate work-log entries.
//!
//! All methods are blocking; async callers run them on the blocking pool.
//! Each call checks out its own pooled connection and returns it on exit.

use crate::core::week::WeekStart;
use crate::db::initialize::open_pool;
use crate::db::pool::DbPool;
use crate::db::{queries, stats};
use crate::errors::AppResult;
use crate::models::entry::{NewEntry, WorkLogEntry};
use crate::models::stats::{CategoryStat, WeeklyStat};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct LogStore {
    pool: DbPool,
    week_start: WeekStart,
}

impl LogStore {
    pub fn new(pool: DbPool, week_start: WeekStart) -> Self {
        Self { pool, week_start }
    }

    /// Open the database at `path`, running pending migrations.
    pub fn open(path: &str, pool_size: u32, week_start: WeekStart) -> AppResult<Self> {
        let pool = open_pool(path, pool_size)?;
        Ok(Self::new(pool, week_start))
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Append an entry and return it as persisted (with `id` and `created_at`).
    #[instrument(skip(self, entry), fields(date = %entry.date, category = %entry.category))]
    pub fn create_entry(&self, entry: &NewEntry) -> AppResult<WorkLogEntry> {
        self.pool.with_conn(|conn| {
            let id = queries::insert_entry(conn, entry)?;
            let stored = queries::load_entry(conn, id)?;
            debug!(id, "Entry created");
            Ok(stored)
        })
    }

    pub fn list_entries(&self) -> AppResult<Vec<WorkLogEntry>> {
        self.pool.with_conn(queries::load_entries)
    }

    pub fn weekly_stats(&self) -> AppResult<Vec<WeeklyStat>> {
        let week_start = self.week_start;
        self.pool
            .with_conn(|conn| stats::weekly_stats(conn, week_start, stats::WEEKLY_LIMIT))
    }

    pub fn category_stats(&self) -> AppResult<Vec<CategoryStat>> {
        self.pool.with_conn(stats::category_stats)
    }

    pub fn count(&self) -> AppResult<i64> {
        self.pool.with_conn(queries::count_entries)
    }
}
