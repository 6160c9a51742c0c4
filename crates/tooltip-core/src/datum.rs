// File: crates/tooltip-core/src/datum.rs
// Summary: Raw rendering-library payloads and their classification into one of five shapes.

use serde::{Deserialize, Serialize};

use crate::series::RowOrigin;
use crate::value::CellValue;

/// `(x, y[, z])` key of a point-like mark (scatter/bubble).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyTuple {
    pub values: Vec<CellValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<RowOrigin>,
}

impl KeyTuple {
    pub fn new(values: Vec<CellValue>) -> Self { Self { values, origin: None } }

    pub fn with_origin(mut self, origin: RowOrigin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Resolved value of a line/area/bar point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub value: CellValue,
}

/// Payload attached to a mark by the rendering library. Which fields are present depends
/// on the mark type; see [`DatumShape::of`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDatum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyTuple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PointData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<CellValue>,
}

impl RawDatum {
    pub fn empty() -> Self { Self::default() }

    pub fn tuple(values: Vec<CellValue>) -> Self {
        Self { key: Some(KeyTuple::new(values)), ..Self::default() }
    }

    pub fn tuple_with_origin(values: Vec<CellValue>, origin: RowOrigin) -> Self {
        Self { key: Some(KeyTuple::new(values).with_origin(origin)), ..Self::default() }
    }

    pub fn point(x: impl Into<CellValue>, value: impl Into<CellValue>) -> Self {
        Self { key: None, data: Some(PointData { value: value.into() }), x: Some(x.into()) }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(s) }
}

/// The datum shapes the classifier distinguishes, in dispatch priority order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DatumShape<'a> {
    TupleWithOrigin { key: &'a [CellValue], origin: &'a RowOrigin },
    TuplePlain { key: &'a [CellValue] },
    DataPoint { value: &'a CellValue, x: Option<&'a CellValue> },
    /// No point data, but the series carries breakout identity.
    BreakoutOnly,
    Empty,
}

impl<'a> DatumShape<'a> {
    pub fn of(datum: &'a RawDatum, has_breakout: bool) -> Self {
        if let Some(key) = &datum.key {
            return match &key.origin {
                Some(origin) => DatumShape::TupleWithOrigin { key: &key.values, origin },
                None => DatumShape::TuplePlain { key: &key.values },
            };
        }
        if let Some(point) = &datum.data {
            return DatumShape::DataPoint { value: &point.value, x: datum.x.as_ref() };
        }
        if has_breakout { DatumShape::BreakoutOnly } else { DatumShape::Empty }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DatumShape::TupleWithOrigin { .. } => "tuple-with-origin",
            DatumShape::TuplePlain { .. } => "tuple",
            DatumShape::DataPoint { .. } => "data-point",
            DatumShape::BreakoutOnly => "breakout-only",
            DatumShape::Empty => "empty",
        }
    }
}
