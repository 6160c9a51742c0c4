// File: crates/tooltip-core/tests/config.rs
// Purpose: Settings/datum loading from JSON, shape flag detection, descriptor serialization.

mod common;

use common::*;
use tooltip_core::{CellValue, ChartSettings, RawDatum, SeriesEmphasis, ShapeFlags, StackType};

#[test]
fn settings_from_json() {
    let s = ChartSettings::from_json(
        r#"{ "stackable.stack_type": "normalized", "series": { "north": { "title": "North Sales" } } }"#,
    )
    .expect("parse settings");
    assert_eq!(s.stack_type, Some(StackType::Normalized));
    assert_eq!(s.series["north"].title.as_deref(), Some("North Sales"));

    let empty = ChartSettings::from_json("{}").expect("parse empty");
    assert_eq!(empty, ChartSettings::default());
}

#[test]
fn stacking_needs_more_than_one_series() {
    let normalized = ChartSettings::default().with_stack_type(StackType::Normalized);
    assert_eq!(ShapeFlags::detect(&normalized, 1), ShapeFlags::default());
    let flags = ShapeFlags::detect(&normalized, 2);
    assert!(flags.is_stacked && flags.is_normalized);

    let stacked = ChartSettings::default().with_stack_type(StackType::Stacked);
    let flags = ShapeFlags::detect(&stacked, 3);
    assert!(flags.is_stacked && !flags.is_normalized);

    assert!(!ShapeFlags::detect(&ChartSettings::default(), 4).is_stacked);
}

#[test]
fn datum_from_json() {
    let point = RawDatum::from_json(r#"{ "data": { "value": 12.5 }, "x": "2024-01-07T00:00:00" }"#).unwrap();
    assert_eq!(point.data.unwrap().value, CellValue::Number(12.5));
    assert_eq!(point.x, Some(CellValue::Temporal(date(2024, 1, 7))));

    let tuple = RawDatum::from_json(
        r#"{ "key": { "values": ["a", 1, true, null], "origin": { "row": ["a", 1] } } }"#,
    )
    .unwrap();
    let key = tuple.key.unwrap();
    assert_eq!(
        key.values,
        vec![CellValue::text("a"), CellValue::Number(1.0), CellValue::Bool(true), CellValue::Null]
    );
    assert_eq!(key.origin.unwrap().row.len(), 2);
}

#[test]
fn descriptor_serializes_for_the_host() {
    let series = vec![category_counts()];
    let d = hover(&series, &RawDatum::point("a", 1), &bar(3));
    let json: serde_json::Value = serde_json::from_str(&d.to_json()).unwrap();

    assert_eq!(json["index"], -1);
    assert_eq!(json["value"], 1.0);
    assert_eq!(json["data"][0]["key"], "Category");
    assert_eq!(json["data"][0]["value"], "a");
    assert_eq!(json["data"][1]["col"]["name"], "count");
    assert_eq!(json["dimensions"][0]["column"]["name"], "category");
    assert_eq!(json["anchor"]["element"]["id"], 3);
    assert_eq!(json["column"]["name"], "count");

    let emphasized = serde_json::to_value(SeriesEmphasis::Series(2)).unwrap();
    assert_eq!(emphasized, 2);
}
