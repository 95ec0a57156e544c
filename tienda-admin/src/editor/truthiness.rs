//! Flag normalization
//!
//! Boolean-like columns reach the editor with whatever type the database
//! driver produced. These helpers turn them into plain `bool`s and never fail.

use serde_json::Value;
use shared::AssignedFlag;

/// Whether a category row is assigned to the store.
///
/// Only the integer `1`, the boolean `true` and the string `"1"` count.
/// Anything else, including `null`, `"true"`, `2` and `1.5`, is unassigned.
pub fn is_assigned(flag: &AssignedFlag) -> bool {
    match flag.as_value() {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "1",
        _ => false,
    }
}

/// Loose `== 1` comparison for integer-like flags such as `wompi_activo`.
///
/// Accepts numbers equal to one, `true`, and strings whose trimmed content
/// parses to one (`"1"`, `" 1 "`, `"1.0"`).
pub fn is_one(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| n == 1.0),
        _ => false,
    }
}
