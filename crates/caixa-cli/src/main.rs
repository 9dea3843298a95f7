//! Caixa CLI - personal cash-flow tracker
//!
//! Usage:
//!   caixa init                              Initialize the ledger database
//!   caixa save --name Ana --balance 500 --income 2500 --fixed fixed.csv
//!   caixa project --balance 500 --income 2500 --months 6 --save --name Ana
//!   caixa history                           List saved projections

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Save {
            name,
            balance,
            income,
            fixed,
            variable,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_save(
                &db,
                &name,
                balance,
                income,
                fixed.as_deref(),
                variable.as_deref(),
            )
        }
        Commands::Project {
            balance,
            income,
            months,
            fixed,
            variable,
            one_off,
            save,
            name,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_project(
                &db,
                &commands::ProjectArgs {
                    balance,
                    income,
                    months,
                    fixed,
                    variable,
                    one_off,
                    save,
                    name,
                },
            )
        }
        Commands::Summary {
            balance,
            income,
            fixed,
            variable,
        } => commands::cmd_summary(balance, income, fixed.as_deref(), variable.as_deref()),
        Commands::History { user, json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_history(&db, user, json)
        }
    }
}
