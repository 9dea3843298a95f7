//! Expense sheet aggregation

use crate::models::SheetRow;

/// Sum the value cells of an expense sheet.
///
/// Total by construction: an empty sheet sums to 0.0 and cells that fail
/// numeric coercion contribute 0.0. Sheets hold free-form user input and a
/// stray cell must never abort the surrounding flow. The sum is not rounded.
///
/// Blank item names do not exclude a row here; that filter applies when a
/// batch is persisted, not when it is totalled.
pub fn sum_rows(rows: &[SheetRow]) -> f64 {
    rows.iter().map(|row| row.amount()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(item: &str, value: serde_json::Value) -> SheetRow {
        SheetRow {
            item: item.to_string(),
            value,
        }
    }

    #[test]
    fn test_empty_sheet_sums_to_zero() {
        assert_eq!(sum_rows(&[]), 0.0);
    }

    #[test]
    fn test_sums_plain_rows() {
        let rows = vec![
            SheetRow::new("Rent", 1200.0),
            SheetRow::new("Energy", 150.0),
            SheetRow::new("Internet", 100.0),
            SheetRow::new("Transport", 200.0),
        ];
        assert_eq!(sum_rows(&rows), 1650.0);
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let rows = vec![row("Groceries", json!("450.50")), row("Leisure", json!(" 200 "))];
        assert_eq!(sum_rows(&rows), 650.5);
    }

    #[test]
    fn test_appending_a_bad_cell_leaves_total_unchanged() {
        let mut rows = vec![SheetRow::new("Food", 100.0)];
        let before = sum_rows(&rows);

        rows.push(row("Mystery", json!("not a number")));
        rows.push(row("Nothing", json!(null)));
        assert_eq!(sum_rows(&rows), before);
    }

    #[test]
    fn test_blank_items_still_count_toward_total() {
        // Blank-item rows are only dropped at persistence time; their values
        // still count when a sheet is totalled.
        let rows = vec![
            row("Rent", json!("abc")),
            row("", json!(50)),
            row("Food", json!(100)),
        ];
        assert_eq!(sum_rows(&rows), 150.0);
    }
}
