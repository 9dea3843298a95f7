//! Snapshot saving commands

use std::path::Path;

use anyhow::{Context, Result};
use caixa_core::aggregate;
use caixa_core::db::Database;
use caixa_core::models::ExpenseCategory;

use super::load_optional_sheet;

/// Save a user snapshot together with both expense sheets.
///
/// Every invocation records a brand-new user row; history keys off the ids
/// handed out here, so repeated saves of the same name are distinct
/// snapshots.
pub fn cmd_save(
    db: &Database,
    name: &str,
    balance: f64,
    income: f64,
    fixed: Option<&Path>,
    variable: Option<&Path>,
) -> Result<()> {
    let fixed_rows = load_optional_sheet(fixed)?;
    let variable_rows = load_optional_sheet(variable)?;

    let user_id = db
        .record_user(name, balance, income)
        .context("Failed to record user snapshot")?;
    let fixed_count = db
        .append_expenses(user_id, &fixed_rows, ExpenseCategory::Fixed)
        .context("Failed to save fixed expenses")?;
    let variable_count = db
        .append_expenses(user_id, &variable_rows, ExpenseCategory::Variable)
        .context("Failed to save variable expenses")?;

    println!("✅ Snapshot saved (user id {})", user_id);
    println!(
        "   Fixed items: {} (total {:.2})",
        fixed_count,
        aggregate::sum_rows(&fixed_rows)
    );
    println!(
        "   Variable items: {} (total {:.2})",
        variable_count,
        aggregate::sum_rows(&variable_rows)
    );

    Ok(())
}
