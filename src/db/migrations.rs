use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row};
use tracing::info;

use crate::error::{AppError, AppResult};

const USER_VERSION: i32 = 2;

/// Columns every `records` table must carry, in their declared order.
pub const RECORD_COLUMNS: [(&str, &str); 12] = [
    ("date", "TEXT"),
    ("study_hours", "REAL"),
    ("research_hours", "REAL"),
    ("exercise_done", "INTEGER"),
    ("water_drank", "INTEGER"),
    ("friends_contacted", "INTEGER"),
    ("expense_amount", "REAL"),
    ("sleep_early", "INTEGER"),
    ("good_deed", "INTEGER"),
    ("reading", "INTEGER"),
    ("finance_study", "INTEGER"),
    ("daily_score", "INTEGER"),
];

#[derive(Debug)]
pub struct MigrationInfo {
    pub version: i32,
    pub description: String,
    pub applied_at: DateTime<Utc>,
}

pub fn run(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS migration_history (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;

    let mut current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version < 1 {
        info!(target: "app::db", version = current_version, "running migration v1");
        migrate_to_v1(conn)?;
        current_version = 1;
        conn.execute(&format!("PRAGMA user_version = {}", current_version), [])?;
        record_migration(conn, 1, "Create daily records table")?;
    }

    if current_version < 2 {
        info!(target: "app::db", version = current_version, "running migration v2");
        migrate_to_v2(conn)?;
        current_version = 2;
        conn.execute(&format!("PRAGMA user_version = {}", current_version), [])?;
        record_migration(conn, 2, "Backfill columns missing from legacy records tables")?;
    }

    if current_version != USER_VERSION {
        info!(
            target: "app::db",
            version = current_version,
            expected = USER_VERSION,
            "database schema is newer than this build"
        );
    }

    Ok(())
}

fn record_migration(conn: &Connection, version: i32, description: &str) -> AppResult<()> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR REPLACE INTO migration_history (version, description, applied_at) VALUES (?, ?, ?)",
        (version, description, now),
    )?;
    Ok(())
}

pub fn get_migration_history(conn: &Connection) -> AppResult<Vec<MigrationInfo>> {
    let mut stmt = conn.prepare(
        "SELECT version, description, applied_at FROM migration_history ORDER BY version",
    )?;

    let migration_iter = stmt.query_map([], |row| {
        let applied_at_str: String = row.get(2)?;
        let applied_at = DateTime::parse_from_rfc3339(&applied_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    2,
                    "applied_at".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?
            .with_timezone(&Utc);

        Ok(MigrationInfo {
            version: row.get(0)?,
            description: row.get(1)?,
            applied_at,
        })
    })?;

    let mut migrations = Vec::new();
    for migration in migration_iter {
        migrations.push(migration?);
    }
    Ok(migrations)
}

// Columns stay nullable so databases written by earlier releases open unchanged.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            date TEXT PRIMARY KEY,
            study_hours REAL,
            research_hours REAL,
            exercise_done INTEGER,
            water_drank INTEGER,
            friends_contacted INTEGER,
            expense_amount REAL,
            sleep_early INTEGER,
            good_deed INTEGER,
            reading INTEGER,
            finance_study INTEGER,
            daily_score INTEGER
        );
        "#,
    )?;

    Ok(())
}

fn migrate_to_v2(conn: &Connection) -> AppResult<()> {
    if !column_exists(conn, "records", "date")? {
        return Err(AppError::storage("records 表缺少主键列 date"));
    }

    for (column, definition) in RECORD_COLUMNS.iter().skip(1) {
        ensure_column(conn, "records", column, definition)?;
    }

    Ok(())
}

fn ensure_column(conn: &Connection, table: &str, column: &str, definition: &str) -> AppResult<()> {
    if !column_exists(conn, table, column)? {
        info!(target: "app::db", %table, %column, "adding missing column");
        let sql = format!("ALTER TABLE {table} ADD COLUMN {column} {definition};");
        conn.execute(&sql, [])?;
    }
    Ok(())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let pragma = format!("PRAGMA table_info({table})");
    let mut stmt = conn.prepare(&pragma)?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        if equals_name(row, column)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn equals_name(row: &Row<'_>, column: &str) -> Result<bool, rusqlite::Error> {
    let name: String = row.get(1)?;
    Ok(name.eq_ignore_ascii_case(column))
}
