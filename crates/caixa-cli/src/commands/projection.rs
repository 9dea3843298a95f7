//! Projection commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use caixa_core::db::Database;
use caixa_core::{aggregate, projection};

use super::load_optional_sheet;

/// Inputs for `caixa project`
pub struct ProjectArgs {
    pub balance: f64,
    pub income: f64,
    pub months: u32,
    pub fixed: Option<PathBuf>,
    pub variable: Option<PathBuf>,
    /// One-time future cost deducted from the starting balance
    pub one_off: f64,
    pub save: bool,
    pub name: String,
}

/// Compute and print a balance projection, optionally persisting it.
///
/// Saving records a fresh user snapshot first and ties the projection to
/// it, mirroring the save-snapshot flow.
pub fn cmd_project(db: &Database, args: &ProjectArgs) -> Result<()> {
    let fixed_rows = load_optional_sheet(args.fixed.as_deref())?;
    let variable_rows = load_optional_sheet(args.variable.as_deref())?;
    let fixed_total = aggregate::sum_rows(&fixed_rows);
    let variable_total = aggregate::sum_rows(&variable_rows);

    let start_balance = args.balance - args.one_off;
    let series = projection::projection_series(
        start_balance,
        args.income,
        fixed_total,
        variable_total,
        args.months,
    );
    let final_balance = projection::final_balance(&series, start_balance);

    println!("📈 Balance projection ({} months)", args.months);
    println!(
        "   Monthly net: {:.2}",
        args.income - (fixed_total + variable_total)
    );
    if args.one_off > 0.0 {
        println!("   One-off cost deducted upfront: {:.2}", args.one_off);
    }
    println!("   ─────────────────────────────");
    for point in &series {
        println!("   {}  {:>12.2}", point.month, point.balance);
    }
    println!("   ─────────────────────────────");

    if final_balance < 0.0 {
        println!(
            "⚠️  Negative closing balance: {:.2}. Consider cutting expenses or raising income.",
            final_balance
        );
    } else {
        println!("✅ Healthy closing balance: {:.2}", final_balance);
    }

    if args.save {
        let user_id = db
            .record_user(&args.name, args.balance, args.income)
            .context("Failed to record user snapshot")?;
        let projection_id = db
            .append_projection(user_id, args.months, final_balance, &series)
            .context("Failed to save projection")?;
        println!("💾 Projection {} saved for user {}", projection_id, user_id);
    }

    Ok(())
}
