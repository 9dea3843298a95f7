//! Caixa Core Library
//!
//! Shared functionality for the caixa personal finance tracker:
//! - Ledger storage (users, expenses, projections) over SQLite
//! - Expense sheet loading and lenient aggregation
//! - Month-by-month balance projection

pub mod aggregate;
pub mod db;
pub mod error;
pub mod models;
pub mod projection;
pub mod sheet;

pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    ExpenseCategory, ExpenseEntry, Projection, ProjectionPoint, SheetRow, UserSnapshot,
};
