// File: crates/tooltip-core/src/classify.rs
// Summary: Interaction classifier: raw datum + chart context -> canonical interaction descriptor.
// Notes:
// - The datum shape is decided once (`DatumShape::of`); each shape produces complete field and
//   dimension lists, and the descriptor is assembled from those in a single step.
// - Column equality always goes through `FieldRef`.

use tracing::debug;

use crate::column::Column;
use crate::datum::{DatumShape, RawDatum};
use crate::descriptor::{Anchor, Dimension, Field, InteractionDescriptor, SeriesEmphasis};
use crate::error::{InteractionError, InteractionResult};
use crate::format::{DefaultFormatter, FormatOptions, ValueFormatter};
use crate::mark::{DomSeriesIndex, MarkElement, MarkKind, SeriesIndexResolver, TriggerEvent};
use crate::series::{Breakout, Row, Series};
use crate::settings::{ChartSettings, ShapeFlags};
use crate::value::CellValue;

/// Read-only chart state a classification runs against.
#[derive(Clone, Copy, Debug)]
pub struct ClassifyContext<'a> {
    pub series: &'a [Series],
    pub settings: &'a ChartSettings,
    pub flags: ShapeFlags,
}

impl<'a> ClassifyContext<'a> {
    pub fn new(series: &'a [Series], settings: &'a ChartSettings, flags: ShapeFlags) -> Self {
        Self { series, settings, flags }
    }
}

/// The mark an event fired on, and the event itself.
#[derive(Clone, Copy, Debug)]
pub struct MarkOrigin<'a> {
    pub element: &'a MarkElement,
    pub event: &'a TriggerEvent,
}

impl<'a> MarkOrigin<'a> {
    pub fn new(element: &'a MarkElement, event: &'a TriggerEvent) -> Self { Self { element, event } }
}

pub struct Classifier {
    formatter: Box<dyn ValueFormatter>,
    resolver: Box<dyn SeriesIndexResolver>,
}

impl Default for Classifier {
    fn default() -> Self { Self::new() }
}

impl Classifier {
    pub fn new() -> Self {
        Self { formatter: Box::new(DefaultFormatter), resolver: Box::new(DomSeriesIndex) }
    }

    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_resolver(mut self, resolver: impl SeriesIndexResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn classify(
        &self,
        datum: &RawDatum,
        ctx: &ClassifyContext<'_>,
        origin: MarkOrigin<'_>,
    ) -> InteractionResult<InteractionDescriptor> {
        let first = ctx.series.first().ok_or(InteractionError::NoSeries)?;
        let index = self.resolver.series_index(origin.element, ctx.flags.is_stacked);
        let active = ctx
            .series
            .get(index)
            .ok_or(InteractionError::SeriesIndexOutOfRange { index, len: ctx.series.len() })?;

        let title = ctx.settings.series_title(active);
        let is_multiseries = ctx.series.len() > 1;
        let multi_breakout = active.breakout.as_ref().filter(|_| is_multiseries);
        let is_single_series_bar = origin.element.is(MarkKind::Bar) && !is_multiseries;

        let shape = DatumShape::of(datum, multi_breakout.is_some());
        let cols: &[Column] = match shape {
            DatumShape::DataPoint { .. } if !is_single_series_bar => active.cols(),
            _ => first.cols(),
        };
        let labels = Labels {
            formatter: self.formatter.as_ref(),
            measure: cols.get(1),
            // breakout multiseries already show the title as the breakout value
            title: if multi_breakout.is_some() { None } else { title },
        };

        let extracted = match shape {
            DatumShape::TupleWithOrigin { key, origin: row_origin } => {
                let origin_cols = row_origin.cols.as_deref().unwrap_or(cols);
                Extracted {
                    fields: labels.zip(origin_cols, &row_origin.row),
                    dimensions: tuple_dimensions(key, cols, multi_breakout),
                    value: key.get(2).cloned(),
                }
            }
            DatumShape::TuplePlain { key } => Extracted {
                fields: labels.zip(cols, key),
                dimensions: tuple_dimensions(key, cols, multi_breakout),
                value: key.get(2).cloned(),
            },
            DatumShape::DataPoint { value, x } => {
                let source_cols = active.data.raw_cols.as_deref().unwrap_or(cols);
                let row = x.and_then(|x| self.find_row(active, source_cols, x));
                match row {
                    Some(row) => {
                        let raw_row = row.source_values();
                        let fields = source_cols
                            .iter()
                            .enumerate()
                            .map(|(i, col)| match labels.measure {
                                Some(measure) if ctx.flags.is_normalized && measure.same_field(col) => Field {
                                    key: labels.label(measure),
                                    value: CellValue::Text(self.formatter.format_value(
                                        value,
                                        &FormatOptions::percent(measure, measure.decimals),
                                    )),
                                    column: Some(col.clone()),
                                },
                                _ => Field {
                                    key: labels.label(col),
                                    value: cell(raw_row, i),
                                    column: Some(col.clone()),
                                },
                            })
                            .collect();
                        let dimensions = source_cols
                            .iter()
                            .enumerate()
                            .map(|(i, col)| Dimension { column: col.clone(), value: cell(raw_row, i) })
                            .collect();
                        Extracted { fields, dimensions, value: Some(value.clone()) }
                    }
                    None => Extracted { value: Some(value.clone()), ..Extracted::default() },
                }
            }
            DatumShape::BreakoutOnly => match multi_breakout {
                Some(b) => Extracted {
                    fields: vec![Field { key: labels.label(&b.column), value: b.value.clone(), column: Some(b.column.clone()) }],
                    dimensions: vec![Dimension { column: b.column.clone(), value: b.value.clone() }],
                    value: None,
                },
                None => Extracted::default(),
            },
            DatumShape::Empty => Extracted::default(),
        };

        let measure = active.data.measure_col();
        let fields = overlay_breakout(extracted.fields, active.breakout.as_ref(), title);
        let fields: Vec<Field> = fields
            .into_iter()
            .map(|f| Field { value: parse_boolean_string(f.column.as_ref(), f.value), ..f })
            .collect();
        let dimensions = extracted
            .dimensions
            .into_iter()
            .filter(|d| d.column.source.is_filterable())
            .map(|d| Dimension { value: parse_boolean_string(Some(&d.column), d.value), ..d })
            .collect();
        let value = extracted.value.map(|v| parse_boolean_string(measure, v));

        let anchor = anchor_for(origin);
        let series_index = if is_single_series_bar { SeriesEmphasis::NoEmphasis } else { SeriesEmphasis::Series(index) };

        debug!(
            shape = shape.name(),
            series_index = index,
            fields = fields.len(),
            stacked = ctx.flags.is_stacked,
            normalized = ctx.flags.is_normalized,
            scalar = ctx.flags.is_scalar_series,
            pointer_anchor = matches!(anchor, Anchor::Pointer(_)),
            "classified interaction"
        );

        Ok(InteractionDescriptor {
            series_index,
            anchor: Some(anchor),
            fields: if fields.is_empty() { None } else { Some(fields) },
            dimensions,
            value,
            column: measure.cloned(),
        })
    }

    /// First row whose x matches, either as plain text or, for temporal positions, through
    /// the formatted display string the row may have been stored as.
    fn find_row<'s>(&self, series: &'s Series, source_cols: &[Column], x: &CellValue) -> Option<&'s Row> {
        let wanted = x.match_key();
        let formatted = match (x.is_temporal(), source_cols.first()) {
            (true, Some(col)) => Some(self.formatter.format_value(x, &FormatOptions::for_column(col))),
            _ => None,
        };
        series.data.rows.iter().find(|row| match row.x() {
            Some(rx) => {
                let stored = rx.match_key();
                stored == wanted || formatted.as_deref() == Some(stored.as_str())
            }
            None => false,
        })
    }
}

#[derive(Default)]
struct Extracted {
    fields: Vec<Field>,
    dimensions: Vec<Dimension>,
    value: Option<CellValue>,
}

struct Labels<'a> {
    formatter: &'a dyn ValueFormatter,
    measure: Option<&'a Column>,
    title: Option<&'a str>,
}

impl Labels<'_> {
    /// The measure column takes the configured series title; everything else its friendly name.
    fn label(&self, col: &Column) -> String {
        match (self.measure, self.title) {
            (Some(m), Some(title)) if m.same_field(col) => title.to_string(),
            _ => self.formatter.friendly_name(col),
        }
    }

    fn zip(&self, cols: &[Column], values: &[CellValue]) -> Vec<Field> {
        cols.iter()
            .zip(values)
            .map(|(col, v)| Field { key: self.label(col), value: v.clone(), column: Some(col.clone()) })
            .collect()
    }
}

fn cell(row: &[CellValue], i: usize) -> CellValue { row.get(i).cloned().unwrap_or_default() }

fn tuple_dimensions(key: &[CellValue], cols: &[Column], breakout: Option<&Breakout>) -> Vec<Dimension> {
    let mut dims: Vec<Dimension> = key
        .iter()
        .zip(cols)
        .take(2)
        .map(|(v, col)| Dimension { column: col.clone(), value: v.clone() })
        .collect();
    if let Some(b) = breakout {
        dims.push(Dimension { column: b.column.clone(), value: b.value.clone() });
    }
    dims
}

/// Fields for the breakout column show the series title when one is set (and drop the column,
/// since the text is final), otherwise the raw breakout value.
fn overlay_breakout(fields: Vec<Field>, breakout: Option<&Breakout>, title: Option<&str>) -> Vec<Field> {
    let Some(b) = breakout else { return fields };
    fields
        .into_iter()
        .map(|f| {
            if !f.column.as_ref().is_some_and(|c| c.same_field(&b.column)) {
                return f;
            }
            match title {
                Some(t) => Field { value: CellValue::text(t), column: None, ..f },
                None => Field { value: b.value.clone(), column: Some(b.column.clone()), ..f },
            }
        })
        .collect()
}

/// Booleans may arrive stringified from axis/label formatting; filters need the real type.
pub fn parse_boolean_string(column: Option<&Column>, value: CellValue) -> CellValue {
    match (column, &value) {
        (Some(c), CellValue::Text(s)) if c.is_boolean() => match s.as_str() {
            "true" => CellValue::Bool(true),
            "false" => CellValue::Bool(false),
            _ => value,
        },
        _ => value,
    }
}

/// Hover: next to the mark unless it is an area (irregular hit region).
/// Click: at the pointer unless it is a line point (the element is the snapped target).
pub fn anchor_for(origin: MarkOrigin<'_>) -> Anchor {
    let is_point = origin.element.is(MarkKind::Dot);
    let is_area = origin.element.is(MarkKind::Area);
    let use_pointer = if origin.event.kind.is_hover() { is_area } else { !is_point };
    if use_pointer {
        Anchor::Pointer(*origin.event)
    } else {
        Anchor::Element(origin.element.clone())
    }
}
