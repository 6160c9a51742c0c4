// File: crates/tooltip-core/src/column.rs
// Summary: Column metadata (semantic type, source tag, stable field reference).

use serde::{Deserialize, Serialize};

/// Stable identity of a column. Column lists coming from different series (or from the
/// pre-transform `raw_cols`) are separate copies, so equality always goes through this key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRef(pub String);

impl FieldRef {
    pub fn new(s: impl Into<String>) -> Self { Self(s.into()) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Boolean,
    Number,
    Text,
    Temporal,
    #[default]
    Other,
}

/// Where a column came from in the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnSource {
    #[default]
    Fields,
    Breakout,
    Aggregation,
    /// Synthesized by a client-side transform (scalar series names).
    QueryTransform,
    Native,
}

impl ColumnSource {
    /// Aggregations and transform-synthesized columns cannot back a filter.
    pub fn is_filterable(self) -> bool {
        !matches!(self, ColumnSource::Aggregation | ColumnSource::QueryTransform)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub base_type: BaseType,
    #[serde(default)]
    pub source: ColumnSource,
    pub field_ref: FieldRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
}

impl Column {
    /// A plain `fields` column keyed by its name.
    pub fn new(name: impl Into<String>, base_type: BaseType) -> Self {
        let name = name.into();
        Self {
            field_ref: FieldRef::new(format!("field:{name}")),
            name,
            display_name: None,
            base_type,
            source: ColumnSource::Fields,
            decimals: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self { Self::new(name, BaseType::Text) }
    pub fn number(name: impl Into<String>) -> Self { Self::new(name, BaseType::Number) }
    pub fn boolean(name: impl Into<String>) -> Self { Self::new(name, BaseType::Boolean) }
    pub fn temporal(name: impl Into<String>) -> Self { Self::new(name, BaseType::Temporal) }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_source(mut self, source: ColumnSource) -> Self {
        if source == ColumnSource::Aggregation {
            self.field_ref = FieldRef::new(format!("aggregation:{}", self.name));
        }
        self.source = source;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn is_boolean(&self) -> bool { self.base_type == BaseType::Boolean }

    pub fn same_field(&self, other: &Column) -> bool { self.field_ref == other.field_ref }
}
