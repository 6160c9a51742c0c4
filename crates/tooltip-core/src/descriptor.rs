// File: crates/tooltip-core/src/descriptor.rs
// Summary: Canonical interaction descriptor handed to the host on hover/click.

use serde::{Serialize, Serializer};

use crate::column::Column;
use crate::mark::{MarkElement, MarkKind, TriggerEvent};
use crate::value::CellValue;

/// Which series the host should emphasize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesEmphasis {
    Series(usize),
    /// Single-series bar charts: emphasis goes through the element itself.
    NoEmphasis,
}

impl SeriesEmphasis {
    pub fn index(self) -> Option<usize> {
        match self {
            SeriesEmphasis::Series(i) => Some(i),
            SeriesEmphasis::NoEmphasis => None,
        }
    }
}

impl Serialize for SeriesEmphasis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.index().map_or(-1, |i| i as i64))
    }
}

/// Where the tooltip goes: next to the mark, or at the pointer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Element(MarkElement),
    Pointer(TriggerEvent),
}

impl Anchor {
    pub fn element(&self) -> Option<&MarkElement> {
        match self {
            Anchor::Element(e) => Some(e),
            Anchor::Pointer(_) => None,
        }
    }

    pub fn is_element_of(&self, kind: MarkKind) -> bool { self.element().is_some_and(|e| e.is(kind)) }
}

/// One displayable key/value row of a tooltip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: CellValue,
    /// `None` when the value is already a display string (series title substitution).
    #[serde(rename = "col")]
    pub column: Option<Column>,
}

/// A `(column, value)` pair usable as a filter predicate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dimension {
    pub column: Column,
    pub value: CellValue,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractionDescriptor {
    #[serde(rename = "index")]
    pub series_index: SeriesEmphasis,
    pub anchor: Option<Anchor>,
    #[serde(rename = "data")]
    pub fields: Option<Vec<Field>>,
    pub dimensions: Vec<Dimension>,
    pub value: Option<CellValue>,
    pub column: Option<Column>,
}

impl InteractionDescriptor {
    /// Nothing a drill-through menu could act on.
    pub fn is_empty(&self) -> bool {
        self.fields.is_none() && self.dimensions.is_empty() && self.value.is_none()
    }

    /// Copy without the element anchor (the pointer anchor is kept).
    pub fn without_element_anchor(mut self) -> Self {
        if matches!(self.anchor, Some(Anchor::Element(_))) {
            self.anchor = None;
        }
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}
