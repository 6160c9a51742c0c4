// File: crates/tooltip-core/src/series.rs
// Summary: Series model: tabular data (columns + rows), optional breakout identity, settings key.
// Notes:
// - Series order is significant; the position in the list is what a mark resolves to.
// - `raw_cols` and row origins describe the pre-transform data a displayed row came from.

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::value::CellValue;

/// Back-reference from a displayed (possibly aggregated/reshaped) row to its source row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowOrigin {
    pub row: Vec<CellValue>,
    /// Columns aligned with `row`; only tuple payloads carry their own list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<Vec<Column>>,
}

impl RowOrigin {
    pub fn new(row: Vec<CellValue>) -> Self { Self { row, cols: None } }

    pub fn with_cols(row: Vec<CellValue>, cols: Vec<Column>) -> Self { Self { row, cols: Some(cols) } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<CellValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<RowOrigin>,
}

impl Row {
    pub fn new(values: Vec<CellValue>) -> Self { Self { values, origin: None } }

    pub fn with_origin(mut self, origin: RowOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// First cell (the x position) of the row.
    pub fn x(&self) -> Option<&CellValue> { self.values.first() }

    /// Values of the source row: the origin's when present, else this row's.
    pub fn source_values(&self) -> &[CellValue] {
        match &self.origin {
            Some(o) => &o.row,
            None => &self.values,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub cols: Vec<Column>,
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_cols: Option<Vec<Column>>,
}

impl SeriesData {
    pub fn new(cols: Vec<Column>, rows: Vec<Row>) -> Self { Self { cols, rows, raw_cols: None } }

    /// The richer pre-transform column list, falling back to `cols`.
    pub fn source_cols(&self) -> &[Column] { self.raw_cols.as_deref().unwrap_or(&self.cols) }

    /// The column conventionally holding the measure.
    pub fn measure_col(&self) -> Option<&Column> { self.cols.get(1) }
}

/// Breakout identity of a series split off a single query result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakout {
    pub column: Column,
    pub value: CellValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Key into per-series settings.
    pub key: String,
    pub data: SeriesData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakout: Option<Breakout>,
}

impl Series {
    pub fn new(key: impl Into<String>, data: SeriesData) -> Self {
        Self { key: key.into(), data, breakout: None }
    }

    /// Convenience constructor: plain rows without origins.
    pub fn from_rows(key: impl Into<String>, cols: Vec<Column>, rows: Vec<Vec<CellValue>>) -> Self {
        let rows = rows.into_iter().map(Row::new).collect();
        Self::new(key, SeriesData::new(cols, rows))
    }

    pub fn with_breakout(mut self, column: Column, value: impl Into<CellValue>) -> Self {
        self.breakout = Some(Breakout { column, value: value.into() });
        self
    }

    pub fn with_raw_cols(mut self, raw_cols: Vec<Column>) -> Self {
        self.data.raw_cols = Some(raw_cols);
        self
    }

    pub fn cols(&self) -> &[Column] { &self.data.cols }
}
