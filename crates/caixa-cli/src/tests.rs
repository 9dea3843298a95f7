//! CLI command tests
//!
//! This module contains tests for the CLI commands.

use std::io::Write as _;
use std::path::PathBuf;

use caixa_core::db::Database;
use caixa_core::models::ExpenseCategory;

use crate::commands::{self, truncate, ProjectArgs};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

/// Write a CSV expense sheet into `dir`, returning its path
fn write_sheet(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "{}", contents).unwrap();
    path
}

// ========== Save Command Tests ==========

#[test]
fn test_cmd_save_records_snapshot_and_expenses() {
    let db = setup_test_db();
    let dir = tempfile::tempdir().unwrap();
    let fixed = write_sheet(&dir, "fixed.csv", "item,value\nRent,1200\nEnergy,150\n");
    let variable = write_sheet(&dir, "variable.csv", "item,value\nGroceries,450\n");

    let result = commands::cmd_save(
        &db,
        "Ana",
        500.0,
        2500.0,
        Some(&fixed),
        Some(&variable),
    );
    assert!(result.is_ok());

    let user = db.get_user(1).unwrap().unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(
        db.list_expenses(1, Some(ExpenseCategory::Fixed)).unwrap().len(),
        2
    );
    assert_eq!(
        db.list_expenses(1, Some(ExpenseCategory::Variable))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_cmd_save_without_sheets() {
    let db = setup_test_db();
    let result = commands::cmd_save(&db, "Ana", 500.0, 2500.0, None, None);
    assert!(result.is_ok());

    assert!(db.get_user(1).unwrap().is_some());
    assert!(db.list_expenses(1, None).unwrap().is_empty());
}

#[test]
fn test_cmd_save_rejects_malformed_sheet() {
    let db = setup_test_db();
    let dir = tempfile::tempdir().unwrap();
    let bad = write_sheet(&dir, "bad.json", r#"{"item": "Rent"}"#);

    let result = commands::cmd_save(&db, "Ana", 500.0, 2500.0, Some(&bad), None);
    assert!(result.is_err());
}

// ========== Project Command Tests ==========

fn project_args(months: u32, save: bool) -> ProjectArgs {
    ProjectArgs {
        balance: 500.0,
        income: 2500.0,
        months,
        fixed: None,
        variable: None,
        one_off: 0.0,
        save,
        name: "Ana".to_string(),
    }
}

#[test]
fn test_cmd_project_without_save_persists_nothing() {
    let db = setup_test_db();
    let result = commands::cmd_project(&db, &project_args(3, false));
    assert!(result.is_ok());

    assert!(db.list_projections(None).unwrap().is_empty());
    assert!(db.get_user(1).unwrap().is_none());
}

#[test]
fn test_cmd_project_save_records_snapshot_and_projection() {
    let db = setup_test_db();
    let dir = tempfile::tempdir().unwrap();
    let fixed = write_sheet(&dir, "fixed.csv", "item,value\nRent,1650\n");
    let variable = write_sheet(&dir, "variable.csv", "item,value\nGroceries,770\n");

    let mut args = project_args(3, true);
    args.fixed = Some(fixed);
    args.variable = Some(variable);

    commands::cmd_project(&db, &args).unwrap();

    let history = db.list_projections(None).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].months, 3);
    assert_eq!(history[0].series.len(), 3);
    // 80 net per month over three months on a 500 start
    assert_eq!(history[0].final_balance, 740.0);

    let user = db.get_user(history[0].user_id).unwrap().unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.start_balance, 500.0);
}

#[test]
fn test_cmd_project_one_off_shifts_the_trajectory() {
    let db = setup_test_db();

    let mut args = project_args(2, true);
    args.one_off = 100.0;
    commands::cmd_project(&db, &args).unwrap();

    let history = db.list_projections(None).unwrap();
    // 400 start after the one-off, plus 2500 income per month
    assert_eq!(history[0].series[0].balance, 2900.0);
    assert_eq!(history[0].final_balance, 5400.0);
    // The snapshot keeps the undeducted balance
    let user = db.get_user(history[0].user_id).unwrap().unwrap();
    assert_eq!(user.start_balance, 500.0);
}

#[test]
fn test_cmd_project_zero_months_saves_empty_series() {
    let db = setup_test_db();
    commands::cmd_project(&db, &project_args(0, true)).unwrap();

    let history = db.list_projections(None).unwrap();
    assert!(history[0].series.is_empty());
    assert_eq!(history[0].final_balance, 500.0);
}

// ========== Summary / History Command Tests ==========

#[test]
fn test_cmd_summary_runs_without_sheets() {
    let result = commands::cmd_summary(500.0, 2500.0, None, None);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_history_empty_and_populated() {
    let db = setup_test_db();
    assert!(commands::cmd_history(&db, None, false).is_ok());

    commands::cmd_project(&db, &project_args(3, true)).unwrap();
    assert!(commands::cmd_history(&db, None, false).is_ok());
    assert!(commands::cmd_history(&db, Some(1), false).is_ok());
    assert!(commands::cmd_history(&db, None, true).is_ok());
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer name here", 10), "a longe...");
}
