//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Caixa - track income and expenses, project future balances
#[derive(Parser)]
#[command(name = "caixa")]
#[command(about = "Personal cash-flow tracker with balance projections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger database path
    #[arg(long, default_value = "caixa.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the ledger database
    Init,

    /// Save a user snapshot together with its expense sheets
    Save {
        /// User name for the snapshot
        #[arg(short, long)]
        name: String,

        /// Current balance
        #[arg(short, long)]
        balance: f64,

        /// Monthly income
        #[arg(short, long)]
        income: f64,

        /// Fixed expense sheet (CSV or JSON)
        #[arg(long)]
        fixed: Option<PathBuf>,

        /// Variable expense sheet (CSV or JSON)
        #[arg(long)]
        variable: Option<PathBuf>,
    },

    /// Compute a balance projection, optionally saving it
    Project {
        /// Current balance
        #[arg(short, long)]
        balance: f64,

        /// Monthly income
        #[arg(short, long)]
        income: f64,

        /// Number of months to project
        #[arg(short, long, default_value = "6")]
        months: u32,

        /// Fixed expense sheet (CSV or JSON)
        #[arg(long)]
        fixed: Option<PathBuf>,

        /// Variable expense sheet (CSV or JSON)
        #[arg(long)]
        variable: Option<PathBuf>,

        /// One-time future cost deducted from the starting balance
        #[arg(long, default_value = "0.0")]
        one_off: f64,

        /// Persist the projection (records a fresh user snapshot too)
        #[arg(long)]
        save: bool,

        /// User name for the saved snapshot
        #[arg(long, default_value = "user")]
        name: String,
    },

    /// Show category totals, monthly net, and standing
    Summary {
        /// Current balance
        #[arg(short, long)]
        balance: f64,

        /// Monthly income
        #[arg(short, long)]
        income: f64,

        /// Fixed expense sheet (CSV or JSON)
        #[arg(long)]
        fixed: Option<PathBuf>,

        /// Variable expense sheet (CSV or JSON)
        #[arg(long)]
        variable: Option<PathBuf>,
    },

    /// List saved projections, newest first
    History {
        /// Only projections saved for this user id
        #[arg(short, long)]
        user: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
