//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the ledger database
//! - `load_optional_sheet` - Shared expense sheet loading
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use caixa_core::db::Database;
use caixa_core::models::SheetRow;
use caixa_core::sheet;

/// Open the ledger database, running idempotent migrations
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_string_lossy();
    Database::open(&path_str).context("Failed to open ledger database")
}

/// Load an optional expense sheet; no path means an empty sheet
pub fn load_optional_sheet(path: Option<&Path>) -> Result<Vec<SheetRow>> {
    match path {
        Some(p) => sheet::load_sheet(p)
            .with_context(|| format!("Failed to load expense sheet {}", p.display())),
        None => Ok(Vec::new()),
    }
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing ledger at {}...", db_path.display());

    let db = open_db(db_path)?;

    println!("✅ Ledger ready at {}", db.path());
    println!();
    println!("Next steps:");
    println!("  1. Save a snapshot: caixa save --name Ana --balance 500 --income 2500 --fixed fixed.csv");
    println!("  2. Project balances: caixa project --balance 500 --income 2500 --months 6");

    Ok(())
}
