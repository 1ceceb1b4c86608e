//! Header-keyed records from a raw value grid.

use indexmap::IndexMap;
use serde_json::Value;

/// One data row keyed by the header row's cell values.
pub type Record = IndexMap<String, Value>;

/// Turn row 0 into keys and every later row into a [`Record`].
///
/// Cells sitting past the end of the header row have no key and are
/// dropped. Column order follows the data row.
pub fn reshape(grid: &[Vec<Value>]) -> Vec<Record> {
    let Some((header, rows)) = grid.split_first() else {
        return Vec::new();
    };
    let keys: Vec<String> = header.iter().map(header_key).collect();

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            if row.len() > keys.len() {
                tracing::debug!(
                    row = index + 1,
                    dropped = row.len() - keys.len(),
                    "cells past the header row have no key"
                );
            }
            row.iter()
                .zip(&keys)
                .map(|(value, key)| (key.clone(), value.clone()))
                .collect()
        })
        .collect()
}

fn header_key(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
