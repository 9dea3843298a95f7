//! User snapshot operations

use rusqlite::params;
use tracing::debug;

use super::{now_timestamp, parse_datetime, Database};
use crate::error::Result;
use crate::models::UserSnapshot;

impl Database {
    /// Record a user snapshot, returning its id.
    ///
    /// Always inserts: there is no uniqueness constraint on the name, and a
    /// repeated save of the same logical user produces a fresh row with a
    /// strictly larger id.
    pub fn record_user(&self, name: &str, start_balance: f64, monthly_income: f64) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (name, start_balance, monthly_income, created_at) VALUES (?, ?, ?, ?)",
            params![name, start_balance, monthly_income, now_timestamp()],
        )?;
        let id = conn.last_insert_rowid();

        debug!(user_id = id, "Recorded user snapshot");
        Ok(id)
    }

    /// Get a user snapshot by id
    pub fn get_user(&self, id: i64) -> Result<Option<UserSnapshot>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                "SELECT id, name, start_balance, monthly_income, created_at FROM users WHERE id = ?",
                params![id],
                |row| {
                    let created_at: String = row.get(4)?;

                    Ok(UserSnapshot {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        start_balance: row.get(2)?,
                        monthly_income: row.get(3)?,
                        created_at: parse_datetime(&created_at),
                    })
                },
            )
            .ok();

        Ok(user)
    }
}
