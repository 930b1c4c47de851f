//! Versioned schema migrations.
//!
//! Each migration runs at most once per database; applied versions are
//! recorded in `schema_migrations`. Running the engine again is a no-op.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

pub struct Migration {
    pub version: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_work_logs",
        description: "Create work_logs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            hours       REAL NOT NULL,
            category    TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at  TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    },
    Migration {
        version: "20240101_0002_index_work_logs_date",
        description: "Index work_logs by date",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_work_logs_date ON work_logs(date);
        "#,
    },
];

fn ensure_migrations_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version     TEXT PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at  TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM schema_migrations WHERE version = ?1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql).map_err(|e| {
        AppError::Migration(format!("{} failed: {}", migration.version, e))
    })?;

    tx.execute(
        "INSERT INTO schema_migrations (version, description) VALUES (?1, ?2)",
        params![migration.version, migration.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_migrations_table(conn)?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if is_applied(conn, migration.version)? {
            debug!(version = migration.version, "Migration already applied");
            continue;
        }

        apply(conn, migration)?;
        info!(
            version = migration.version,
            description = migration.description,
            "Migration applied"
        );
        applied += 1;
    }

    Ok(applied)
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations ORDER BY version ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
