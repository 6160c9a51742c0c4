// File: crates/tooltip-core/src/format.rs
// Summary: Value formatting and column naming collaborators, with a default implementation.

use chrono::Timelike;

use crate::column::Column;
use crate::value::CellValue;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FormatOptions<'a> {
    pub column: Option<&'a Column>,
    pub number_style: NumberStyle,
    pub decimals: Option<u32>,
}

impl<'a> FormatOptions<'a> {
    pub fn for_column(column: &'a Column) -> Self {
        Self { column: Some(column), ..Self::default() }
    }

    pub fn percent(column: &'a Column, decimals: Option<u32>) -> Self {
        Self { column: Some(column), number_style: NumberStyle::Percent, decimals }
    }
}

/// Renders typed values and column names for display.
pub trait ValueFormatter {
    fn format_value(&self, value: &CellValue, opts: &FormatOptions<'_>) -> String;
    fn friendly_name(&self, column: &Column) -> String;
}

/// Max fraction digits when no precision is configured.
const DEFAULT_MAX_DECIMALS: usize = 2;

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    fn format_number(&self, n: f64, opts: &FormatOptions<'_>) -> String {
        let (scaled, suffix) = match opts.number_style {
            NumberStyle::Percent => (n * 100.0, "%"),
            NumberStyle::Decimal => (n, ""),
        };
        let body = match opts.decimals {
            Some(d) => format!("{:.*}", d as usize, scaled),
            None => trim_fraction(format!("{:.*}", DEFAULT_MAX_DECIMALS, scaled)),
        };
        format!("{body}{suffix}")
    }
}

impl ValueFormatter for DefaultFormatter {
    fn format_value(&self, value: &CellValue, opts: &FormatOptions<'_>) -> String {
        match value {
            CellValue::Number(n) => self.format_number(*n, opts),
            CellValue::Temporal(t) => {
                if t.num_seconds_from_midnight() == 0 {
                    t.format("%B %-d, %Y").to_string()
                } else {
                    t.format("%B %-d, %Y, %-I:%M %p").to_string()
                }
            }
            other => other.to_string(),
        }
    }

    fn friendly_name(&self, column: &Column) -> String {
        match &column.display_name {
            Some(name) => name.clone(),
            None => humanize(&column.name),
        }
    }
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') { return s; }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `created_at` -> `Created At`
fn humanize(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
