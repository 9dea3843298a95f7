//! Monthly summary command

use std::path::Path;

use anyhow::Result;
use caixa_core::aggregate;

use super::load_optional_sheet;

/// Show category totals, the monthly net, and the resulting standing
pub fn cmd_summary(
    balance: f64,
    income: f64,
    fixed: Option<&Path>,
    variable: Option<&Path>,
) -> Result<()> {
    let fixed_total = aggregate::sum_rows(&load_optional_sheet(fixed)?);
    let variable_total = aggregate::sum_rows(&load_optional_sheet(variable)?);
    let monthly_net = income - (fixed_total + variable_total);

    println!("📊 Monthly summary");
    println!("   ─────────────────────────────");
    println!("   Income:            {:>12.2}", income);
    println!("   Fixed expenses:    {:>12.2}", fixed_total);
    println!("   Variable expenses: {:>12.2}", variable_total);
    println!("   Monthly net:       {:>12.2}", monthly_net);
    println!("   Current balance:   {:>12.2}", balance);

    if balance + monthly_net >= 0.0 {
        println!("   Standing: positive ✅ ({:+.2}/month)", monthly_net);
    } else {
        println!("   Standing: negative ⚠️  ({:+.2}/month)", monthly_net);
    }

    Ok(())
}
