//! Aggregation queries over `work_logs` and database information.

use crate::core::week::{WeekStart, week_key};
use crate::db::queries::parse_date_column;
use crate::errors::AppResult;
use crate::models::stats::{Aggregate, CategoryStat, WeeklyStat};
use rusqlite::{Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::fs;

/// Number of most recent weeks returned by `weekly_stats`.
pub const WEEKLY_LIMIT: usize = 8;

/// Totals per week bucket, most recent bucket first, at most `limit` rows.
pub fn weekly_stats(
    conn: &Connection,
    week_start: WeekStart,
    limit: usize,
) -> AppResult<Vec<WeeklyStat>> {
    let mut stmt = conn.prepare("SELECT date, hours FROM work_logs")?;
    let mut rows = stmt.query([])?;

    let mut buckets: BTreeMap<String, Aggregate> = BTreeMap::new();
    while let Some(row) = rows.next()? {
        let date_str: String = row.get(0)?;
        let date = parse_date_column(0, &date_str)?;
        let hours: f64 = row.get(1)?;

        buckets
            .entry(week_key(date, week_start))
            .or_default()
            .add(hours);
    }

    Ok(buckets
        .into_iter()
        .rev()
        .take(limit)
        .map(|(week, agg)| WeeklyStat::new(week, &agg))
        .collect())
}

/// Totals per exact category string, ordered by category.
pub fn category_stats(conn: &Connection) -> AppResult<Vec<CategoryStat>> {
    let mut stmt = conn.prepare("SELECT category, hours FROM work_logs")?;
    let mut rows = stmt.query([])?;

    let mut buckets: BTreeMap<String, Aggregate> = BTreeMap::new();
    while let Some(row) = rows.next()? {
        let category: String = row.get(0)?;
        let hours: f64 = row.get(1)?;

        buckets.entry(category).or_default().add(hours);
    }

    Ok(buckets
        .into_iter()
        .map(|(category, agg)| CategoryStat::new(category, &agg))
        .collect())
}

/// Summary shown by `worklog db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub file_size: u64,
    pub entries: i64,
    pub categories: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total_hours: f64,
}

pub fn db_info(conn: &Connection, db_path: &str) -> AppResult<DbInfo> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let (entries, categories, total_hours): (i64, i64, Option<f64>) = conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT category), SUM(hours) FROM work_logs",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM work_logs ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM work_logs ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbInfo {
        file_size,
        entries,
        categories,
        first_date,
        last_date,
        total_hours: total_hours.unwrap_or(0.0),
    })
}
