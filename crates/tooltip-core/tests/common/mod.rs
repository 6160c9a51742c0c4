// File: crates/tooltip-core/tests/common/mod.rs
// Purpose: Shared fixtures for classifier and wiring tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tooltip_core::{
    CellValue, ChartSettings, ClassifyContext, Classifier, Column, InteractionDescriptor, MarkElement, MarkKind,
    MarkOrigin, RawDatum, Series, ShapeFlags, TriggerEvent,
};

pub fn category() -> Column { Column::text("category") }
pub fn count() -> Column { Column::number("count") }

/// `[category, count]` with rows `a=1`, `b=2`.
pub fn category_counts() -> Series {
    Series::from_rows(
        "counts",
        vec![category(), count()],
        vec![vec!["a".into(), 1.into()], vec!["b".into(), 2.into()]],
    )
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

pub fn classify(
    series: &[Series],
    settings: &ChartSettings,
    datum: &RawDatum,
    element: &MarkElement,
    event: &TriggerEvent,
) -> InteractionDescriptor {
    let flags = ShapeFlags::detect(settings, series.len());
    let ctx = ClassifyContext::new(series, settings, flags);
    Classifier::new()
        .classify(datum, &ctx, MarkOrigin::new(element, event))
        .expect("classify")
}

pub fn hover(series: &[Series], datum: &RawDatum, element: &MarkElement) -> InteractionDescriptor {
    classify(series, &ChartSettings::default(), datum, element, &TriggerEvent::mouse_move(10.0, 20.0))
}

pub fn bar(id: u64) -> MarkElement { MarkElement::new(id, MarkKind::Bar) }

pub fn field_values(d: &InteractionDescriptor) -> Vec<(String, CellValue)> {
    d.fields
        .as_ref()
        .map(|fs| fs.iter().map(|f| (f.key.clone(), f.value.clone())).collect())
        .unwrap_or_default()
}

pub fn dimension_names(d: &InteractionDescriptor) -> Vec<String> {
    d.dimensions.iter().map(|d| d.column.name.clone()).collect()
}
