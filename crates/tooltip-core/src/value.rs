// File: crates/tooltip-core/src/value.rs
// Summary: Typed cell value shared by rows, raw datums and descriptors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2^53; integral floats beyond this are printed through the float path.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A single cell as produced by a query result or a rendering library payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Temporal(NaiveDateTime),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self { CellValue::Text(s.into()) }

    pub fn is_temporal(&self) -> bool { matches!(self, CellValue::Temporal(_)) }

    /// Same text a row cell would be compared by when matching an x position.
    pub fn match_key(&self) -> String { self.to_string() }
}

impl Default for CellValue {
    fn default() -> Self { CellValue::Null }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => {
                // integral values print without a fractional part while exactly representable
                if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Temporal(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self { CellValue::Bool(v) }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self { CellValue::Number(v) }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self { CellValue::Number(v as f64) }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self { CellValue::Number(v as f64) }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self { CellValue::Text(v.to_string()) }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self { CellValue::Text(v) }
}

impl From<NaiveDateTime> for CellValue {
    fn from(v: NaiveDateTime) -> Self { CellValue::Temporal(v) }
}
