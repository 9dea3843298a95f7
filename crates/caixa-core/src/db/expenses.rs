//! Expense batch operations

use rusqlite::params;
use tracing::debug;

use super::{now_timestamp, parse_datetime, Database};
use crate::error::Result;
use crate::models::{ExpenseCategory, ExpenseEntry, SheetRow};

impl Database {
    /// Append a batch of expense rows for a user under one category.
    ///
    /// Rows whose trimmed item name is empty are silently dropped; value
    /// cells that fail numeric coercion are stored as 0.0 rather than
    /// rejecting the batch. The batch commits atomically: a storage fault
    /// rolls back every row. Returns the number of rows inserted; a batch
    /// with zero valid rows inserts nothing and is not an error.
    pub fn append_expenses(
        &self,
        user_id: i64,
        rows: &[SheetRow],
        category: ExpenseCategory,
    ) -> Result<usize> {
        let conn = self.conn()?;
        let created_at = now_timestamp();

        // Use explicit transaction for atomicity
        conn.execute("BEGIN TRANSACTION", [])?;

        let result = (|| {
            let mut inserted = 0;
            for row in rows {
                let item = row.item_trimmed();
                if item.is_empty() {
                    continue;
                }
                conn.execute(
                    "INSERT INTO expenses (user_id, category, item, value, created_at) VALUES (?, ?, ?, ?, ?)",
                    params![user_id, category.as_str(), item, row.amount(), created_at],
                )?;
                inserted += 1;
            }
            Ok(inserted)
        })();

        match result {
            Ok(inserted) => {
                conn.execute("COMMIT", [])?;
                debug!(user_id, category = %category, inserted, "Appended expense batch");
                Ok(inserted)
            }
            Err(e) => {
                let _ = conn.execute("ROLLBACK", []);
                Err(e)
            }
        }
    }

    /// List stored expense entries for a user, optionally one category only
    pub fn list_expenses(
        &self,
        user_id: i64,
        category: Option<ExpenseCategory>,
    ) -> Result<Vec<ExpenseEntry>> {
        let conn = self.conn()?;

        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<ExpenseEntry> {
            let category_str: String = row.get(2)?;
            let created_at: String = row.get(5)?;

            Ok(ExpenseEntry {
                id: row.get(0)?,
                user_id: row.get(1)?,
                category: category_str.parse().unwrap_or(ExpenseCategory::Variable),
                item: row.get(3)?,
                value: row.get(4)?,
                created_at: parse_datetime(&created_at),
            })
        };

        let entries = match category {
            Some(cat) => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, category, item, value, created_at FROM expenses WHERE user_id = ? AND category = ? ORDER BY id",
                )?;
                let rows = stmt.query_map(params![user_id, cat.as_str()], map_row)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, category, item, value, created_at FROM expenses WHERE user_id = ? ORDER BY id",
                )?;
                let rows = stmt.query_map(params![user_id], map_row)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
        };

        Ok(entries)
    }
}
