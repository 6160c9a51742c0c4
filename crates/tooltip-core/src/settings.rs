// File: crates/tooltip-core/src/settings.rs
// Summary: Chart/series settings (serde-loaded configuration) and derived shape flags.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackType {
    Stacked,
    Normalized,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SeriesSettings {
    pub fn titled(title: impl Into<String>) -> Self { Self { title: Some(title.into()) } }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default, rename = "stackable.stack_type", skip_serializing_if = "Option::is_none")]
    pub stack_type: Option<StackType>,
    /// Per-series settings keyed by `Series::key`.
    #[serde(default)]
    pub series: HashMap<String, SeriesSettings>,
}

impl ChartSettings {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(s) }

    pub fn with_stack_type(mut self, stack_type: StackType) -> Self {
        self.stack_type = Some(stack_type);
        self
    }

    pub fn with_series_title(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.series.insert(key.into(), SeriesSettings::titled(title));
        self
    }

    pub fn series_settings(&self, series: &Series) -> Option<&SeriesSettings> { self.series.get(&series.key) }

    /// Configured title for `series`, if any.
    pub fn series_title(&self, series: &Series) -> Option<&str> {
        self.series_settings(series).and_then(|s| s.title.as_deref())
    }
}

/// How the series are laid out on the shared surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeFlags {
    pub is_stacked: bool,
    pub is_normalized: bool,
    pub is_scalar_series: bool,
}

impl ShapeFlags {
    /// Stacking only takes effect with more than one series on the surface.
    pub fn detect(settings: &ChartSettings, series_count: usize) -> Self {
        let multi = series_count > 1;
        Self {
            is_stacked: multi && settings.stack_type.is_some(),
            is_normalized: multi && settings.stack_type == Some(StackType::Normalized),
            is_scalar_series: false,
        }
    }

    pub fn with_scalar_series(mut self, is_scalar_series: bool) -> Self {
        self.is_scalar_series = is_scalar_series;
        self
    }
}
