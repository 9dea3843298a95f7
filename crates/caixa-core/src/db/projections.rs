//! Projection history operations

use rusqlite::params;
use tracing::debug;

use super::{now_timestamp, parse_datetime, Database};
use crate::error::Result;
use crate::models::{Projection, ProjectionPoint};

impl Database {
    /// Append a computed projection for a user.
    ///
    /// The series is serialized to JSON for storage and decoded back by
    /// [`Database::list_projections`]. `final_balance` is the caller's
    /// authoritative closing balance: the last series point, or the
    /// starting balance when the series is empty.
    pub fn append_projection(
        &self,
        user_id: i64,
        months: u32,
        final_balance: f64,
        series: &[ProjectionPoint],
    ) -> Result<i64> {
        let series_json = serde_json::to_string(series)?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO projections (user_id, months, final_balance, series_json, created_at) VALUES (?, ?, ?, ?, ?)",
            params![user_id, months, final_balance, series_json, now_timestamp()],
        )?;
        let id = conn.last_insert_rowid();

        debug!(user_id, projection_id = id, months, "Saved projection");
        Ok(id)
    }

    /// List saved projections, newest first.
    ///
    /// `user_id = None` returns projections across all users. Ordering is by
    /// creation time descending, ties broken by id descending.
    pub fn list_projections(&self, user_id: Option<i64>) -> Result<Vec<Projection>> {
        let conn = self.conn()?;

        type RawRow = (i64, i64, u32, f64, String, String);
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<RawRow> {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        };

        let rows = match user_id {
            Some(user_id) => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, months, final_balance, series_json, created_at FROM projections WHERE user_id = ? ORDER BY created_at DESC, id DESC",
                )?;
                let rows = stmt.query_map(params![user_id], map_row)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, months, final_balance, series_json, created_at FROM projections ORDER BY created_at DESC, id DESC",
                )?;
                let rows = stmt.query_map([], map_row)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
        };

        let mut projections = Vec::with_capacity(rows.len());
        for (id, user_id, months, final_balance, series_json, created_at) in rows {
            projections.push(Projection {
                id,
                user_id,
                months,
                final_balance,
                series: serde_json::from_str(&series_json)?,
                created_at: parse_datetime(&created_at),
            });
        }

        Ok(projections)
    }
}
