//! Ledger storage layer with connection pooling and idempotent migrations
//!
//! This module is organized by domain:
//! - `users` - user snapshot inserts and lookups
//! - `expenses` - expense batch inserts and history reads
//! - `projections` - projection inserts and history reads
//!
//! All three tables are append-only: the core never updates or deletes a
//! row once written. Every save action is a new historical snapshot.

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod expenses;
mod projections;
mod users;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Timestamp stamped on every inserted row: ISO-8601 in UTC.
///
/// Stamped by the writing code rather than a column default so that all
/// rows of one batch share the exact same instant.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Parse a stored ISO-8601 timestamp back into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Ledger store wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Open (creating if needed) the ledger database at `path`.
    ///
    /// Migrations only create what is absent, so this is safe to call on
    /// every process start.
    pub fn open(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create an in-memory database (for testing)
    ///
    /// The pool is capped at a single connection so every handle sees the
    /// same private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager)?;

        let db = Self {
            pool,
            db_path: ":memory:".to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Performance pragmas for local storage
            -- WAL mode: readers don't block the single writer
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: good balance of safety and performance
            PRAGMA synchronous = NORMAL;

            -- User snapshots (one row per save action, never updated)
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                start_balance REAL,
                monthly_income REAL,
                created_at TEXT
            );

            -- Itemized expenses, batch-inserted per save
            -- category is 'fixa' or 'variavel'; user_id references users by
            -- convention (not enforced)
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER,
                category TEXT,
                item TEXT,
                value REAL,
                created_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_user ON expenses(user_id);

            -- Saved balance projections, series stored as a JSON array of
            -- {month, balance} pairs
            CREATE TABLE IF NOT EXISTS projections (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER,
                months INTEGER,
                final_balance REAL,
                series_json TEXT,
                created_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_projections_user ON projections(user_id);
            CREATE INDEX IF NOT EXISTS idx_projections_created ON projections(created_at);
            "#,
        )?;

        info!("Ledger schema initialized");
        Ok(())
    }
}
