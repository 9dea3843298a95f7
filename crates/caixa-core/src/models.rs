//! Domain models for caixa

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved user snapshot
///
/// One row is inserted per save action, even for a name that was saved
/// before. Snapshots are immutable after creation; history queries key off
/// the ids handed out at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: i64,
    pub name: String,
    pub start_balance: f64,
    pub monthly_income: f64,
    pub created_at: DateTime<Utc>,
}

/// Expense category
///
/// Persisted under the tags `fixa` and `variavel`, which existing ledgers
/// use for the category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Recurring fixed expenses (rent, utilities)
    #[serde(rename = "fixa")]
    Fixed,
    /// Month-to-month variable expenses (groceries, leisure)
    #[serde(rename = "variavel")]
    Variable,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixa",
            Self::Variable => "variavel",
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixa" | "fixed" => Ok(Self::Fixed),
            "variavel" | "variable" => Ok(Self::Variable),
            _ => Err(format!("Unknown expense category: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: i64,
    pub user_id: i64,
    pub category: ExpenseCategory,
    pub item: String,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// One row of a user-edited expense sheet
///
/// The value cell stays raw JSON because sheets hold free-form user input:
/// numbers, numeric strings, or garbage. Coercion happens in
/// [`SheetRow::amount`]. Sheets written with a `valor` column are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRow {
    #[serde(default)]
    pub item: String,
    #[serde(alias = "valor", default)]
    pub value: Value,
}

impl SheetRow {
    pub fn new(item: impl Into<String>, value: f64) -> Self {
        Self {
            item: item.into(),
            value: Value::from(value),
        }
    }

    /// Numeric amount of the value cell.
    ///
    /// Numbers pass through, numeric strings are trimmed and parsed, and
    /// anything else counts as 0.0. A stray cell must never abort the
    /// surrounding flow.
    pub fn amount(&self) -> f64 {
        match &self.value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Item name with surrounding whitespace removed
    pub fn item_trimmed(&self) -> &str {
        self.item.trim()
    }
}

/// One point of a balance projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// First-of-month label, formatted "YYYY-MM"
    pub month: String,
    /// Projected balance at the end of that month, rounded to 2 decimals
    pub balance: f64,
}

/// A saved balance projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub id: i64,
    pub user_id: i64,
    pub months: u32,
    pub final_balance: f64,
    pub series: Vec<ProjectionPoint>,
    pub created_at: DateTime<Utc>,
}
