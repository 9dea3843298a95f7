//! Projection history commands

use anyhow::{Context, Result};
use caixa_core::db::Database;

use super::truncate;

/// List saved projections, newest first
pub fn cmd_history(db: &Database, user: Option<i64>, json: bool) -> Result<()> {
    let projections = db
        .list_projections(user)
        .context("Failed to load projection history")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
        return Ok(());
    }

    if projections.is_empty() {
        println!("No saved projections.");
        return Ok(());
    }

    println!("🗂  Saved projections");
    println!("   ─────────────────────────────");
    for p in &projections {
        let name = db
            .get_user(p.user_id)?
            .map(|u| u.name)
            .unwrap_or_else(|| format!("user {}", p.user_id));
        println!(
            "   #{:<4} {:<16} {:>3} months  final {:>12.2}  {}",
            p.id,
            truncate(&name, 16),
            p.months,
            p.final_balance,
            p.created_at.format("%Y-%m-%d %H:%M"),
        );
    }

    Ok(())
}
