//! Expense sheet loading
//!
//! Sheets are the file form of user-edited expense tables: CSV with an
//! `item,value` header, or a JSON array of `{item, value}` objects. The
//! `valor` column/key is accepted wherever `value` is. Individual cells are
//! free-form text and never fail a load; only structurally malformed files
//! are rejected.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::SheetRow;

/// Load an expense sheet from a CSV or JSON file, chosen by extension.
pub fn load_sheet(path: &Path) -> Result<Vec<SheetRow>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "json" => {
            let data = std::fs::read_to_string(path)?;
            parse_json_sheet(&data)
        }
        _ => parse_csv_sheet(File::open(path)?),
    }
}

/// Parse a JSON sheet: an array of `{item, value}` objects.
pub fn parse_json_sheet(data: &str) -> Result<Vec<SheetRow>> {
    let value: Value = serde_json::from_str(data)?;
    let Value::Array(items) = value else {
        return Err(Error::InvalidArgument(
            "expense sheet must be a JSON array of {item, value} objects".to_string(),
        ));
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item)
                .map_err(|e| Error::InvalidArgument(format!("malformed sheet row: {}", e)))
        })
        .collect()
}

/// Parse a CSV sheet with an `item,value` header.
pub fn parse_csv_sheet<R: Read>(reader: R) -> Result<Vec<SheetRow>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let item_idx = headers.iter().position(|h| h.eq_ignore_ascii_case("item"));
    let value_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("value") || h.eq_ignore_ascii_case("valor"));

    let (Some(item_idx), Some(value_idx)) = (item_idx, value_idx) else {
        return Err(Error::InvalidArgument(
            "expense sheet needs 'item' and 'value' columns".to_string(),
        ));
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(SheetRow {
            item: record.get(item_idx).unwrap_or("").to_string(),
            value: Value::String(record.get(value_idx).unwrap_or("").to_string()),
        });
    }

    Ok(rows)
}
