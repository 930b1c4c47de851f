use crate::errors::{AppError, AppResult};
use crate::models::entry::{NewEntry, WorkLogEntry};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

/// `CURRENT_TIMESTAMP` format used by SQLite for `created_at`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn parse_date_column(idx: usize, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(value.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<WorkLogEntry> {
    let date_str: String = row.get("date")?;
    let date = parse_date_column(1, &date_str)?;

    let created_str: String = row.get("created_at")?;
    let created_at = NaiveDateTime::parse_from_str(&created_str, CREATED_AT_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(WorkLogEntry {
        id: row.get("id")?,
        date,
        hours: row.get("hours")?,
        category: row.get("category")?,
        description: row.get("description")?,
        created_at,
    })
}

/// Insert a new entry and return its id. `created_at` comes from the column default.
pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO work_logs (date, hours, category, description)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        entry.date.format("%Y-%m-%d").to_string(),
        entry.hours,
        entry.category,
        entry.description,
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<WorkLogEntry> {
    let entry = conn.query_row(
        "SELECT id, date, hours, category, description, created_at
         FROM work_logs
         WHERE id = ?1",
        [id],
        map_row,
    )?;
    Ok(entry)
}

/// All entries, most recent date first.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<WorkLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, hours, category, description, created_at
         FROM work_logs
         ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM work_logs", [], |row| row.get(0))?;
    Ok(count)
}
