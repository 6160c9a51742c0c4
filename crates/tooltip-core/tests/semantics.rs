// File: crates/tooltip-core/tests/semantics.rs
// Purpose: Boolean coercion, breakout overlay, and normalized percent fields.

mod common;

use common::*;
use tooltip_core::{
    CellValue, ChartSettings, Column, ColumnSource, MarkElement, MarkKind, RawDatum, Row, RowOrigin, Series,
    SeriesData, StackType, TriggerEvent,
};

fn bool_series() -> Vec<Series> {
    vec![Series::from_rows(
        "flags",
        vec![category(), Column::boolean("count")],
        vec![vec!["a".into(), "true".into()], vec!["b".into(), "false".into()]],
    )]
}

#[test]
fn stringified_boolean_value_is_coerced() {
    let series = bool_series();
    let d = hover(&series, &RawDatum::point("a", "true"), &bar(1));
    assert_eq!(d.value, Some(CellValue::Bool(true)));
    assert_eq!(d.dimensions[1].value, CellValue::Bool(true));
    assert_eq!(d.fields.as_ref().unwrap()[1].value, CellValue::Bool(true));

    let d = hover(&series, &RawDatum::point("b", "false"), &bar(2));
    assert_eq!(d.value, Some(CellValue::Bool(false)));
    assert_eq!(d.dimensions[1].value, CellValue::Bool(false));
}

#[test]
fn booleans_only_coerced_for_boolean_columns() {
    let series = vec![Series::from_rows(
        "s",
        vec![category(), Column::text("label")],
        vec![vec!["a".into(), "true".into()]],
    )];
    let d = hover(&series, &RawDatum::point("a", "true"), &bar(1));
    assert_eq!(d.value, Some(CellValue::text("true")));
    assert_eq!(d.dimensions[1].value, CellValue::text("true"));
}

#[test]
fn other_strings_in_boolean_columns_are_left_alone() {
    let series = vec![Series::from_rows(
        "s",
        vec![category(), Column::boolean("flag")],
        vec![vec!["a".into(), "TRUE".into()]],
    )];
    let d = hover(&series, &RawDatum::point("a", "TRUE"), &bar(1));
    assert_eq!(d.value, Some(CellValue::text("TRUE")));
}

#[test]
fn boolean_dimension_from_tuple() {
    let series = vec![Series::from_rows("s", vec![Column::boolean("active"), Column::number("n")], vec![])];
    let d = hover(&series, &RawDatum::tuple(vec!["false".into(), 3.into()]), &MarkElement::new(1, MarkKind::Dot));
    assert_eq!(d.dimensions[0].value, CellValue::Bool(false));
}

fn region() -> Column { Column::text("region").with_source(ColumnSource::Breakout) }

/// Two series split by `region`; each row carries its pre-transform origin.
fn breakout_series() -> Vec<Series> {
    let cols = vec![Column::text("month"), count()];
    let raw_cols = vec![Column::text("month"), region(), count()];
    let make = |key: &str, region_value: &str, n: i32| {
        let row = Row::new(vec!["jan".into(), n.into()])
            .with_origin(RowOrigin::new(vec!["jan".into(), region_value.into(), n.into()]));
        Series::new(key, SeriesData::new(cols.clone(), vec![row]))
            .with_raw_cols(raw_cols.clone())
            .with_breakout(region(), region_value)
    };
    vec![make("north", "North", 3), make("south", "South", 8)]
}

#[test]
fn breakout_field_shows_breakout_value_without_title() {
    let series = breakout_series();
    let d = hover(&series, &RawDatum::point("jan", 8), &MarkElement::new(1, MarkKind::Dot).with_class("_1"));
    let fields = d.fields.unwrap();
    assert_eq!(fields[1].key, "Region");
    assert_eq!(fields[1].value, CellValue::text("South"));
    assert_eq!(fields[1].column, Some(region()));
    assert_eq!(fields[2].value, CellValue::Number(8.0));
}

#[test]
fn breakout_field_shows_title_and_drops_column() {
    let series = breakout_series();
    let settings = ChartSettings::default().with_series_title("south", "Southern Sales");
    let d = classify(
        &series,
        &settings,
        &RawDatum::point("jan", 8),
        &MarkElement::new(1, MarkKind::Dot).with_class("_1"),
        &TriggerEvent::mouse_move(0.0, 0.0),
    );
    let fields = d.fields.unwrap();
    assert_eq!(fields[1].value, CellValue::text("Southern Sales"));
    assert_eq!(fields[1].column, None);
    // breakout multiseries keep the measure's own name
    assert_eq!(fields[2].key, "Count");
    // dimensions still filter on the real breakout value
    assert_eq!(d.dimensions[1].value, CellValue::text("South"));
}

#[test]
fn area_without_point_reports_breakout_only() {
    let series = breakout_series();
    let d = hover(&series, &RawDatum::empty(), &MarkElement::new(1, MarkKind::Area).with_class("_0"));
    let fields = d.fields.clone().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "Region");
    assert_eq!(fields[0].value, CellValue::text("North"));
    assert_eq!(dimension_names(&d), vec!["region"]);
    assert_eq!(d.dimensions[0].value, CellValue::text("North"));
    assert_eq!(d.value, None);
}

#[test]
fn tuple_dimensions_append_breakout() {
    let cols = vec![Column::number("x"), Column::number("y")];
    let series = vec![
        Series::from_rows("a", cols.clone(), vec![]).with_breakout(region(), "North"),
        Series::from_rows("b", cols, vec![]).with_breakout(region(), "South"),
    ];
    let d = hover(&series, &RawDatum::tuple(vec![1.into(), 2.into()]), &MarkElement::new(1, MarkKind::Dot).with_class("_1"));
    assert_eq!(dimension_names(&d), vec!["x", "y", "region"]);
    assert_eq!(d.dimensions[2].value, CellValue::text("South"));
}

#[test]
fn normalized_measure_reports_percent_of_datum_value() {
    let cols = vec![category(), Column::number("count").with_decimals(1)];
    let series = vec![
        Series::from_rows("a", cols.clone(), vec![vec!["x".into(), 10.into()]]),
        Series::from_rows("b", cols, vec![vec!["x".into(), 20.into()]]),
    ];
    let settings = ChartSettings::default().with_stack_type(StackType::Normalized);
    let d = classify(
        &series,
        &settings,
        &RawDatum::point("x", 0.4567),
        &MarkElement::new(1, MarkKind::Bar).in_stack(1),
        &TriggerEvent::mouse_move(0.0, 0.0),
    );
    let fields = d.fields.unwrap();
    assert_eq!(fields[1].key, "Count");
    assert_eq!(fields[1].value, CellValue::text("45.7%"));
    // the row's own value is untouched in the dimensions
    assert_eq!(d.dimensions[1].value, CellValue::Number(20.0));
    assert_eq!(d.value, Some(CellValue::Number(0.4567)));
}

#[test]
fn stacked_but_not_normalized_keeps_raw_value() {
    let series = vec![
        Series::from_rows("a", vec![category(), count()], vec![vec!["x".into(), 10.into()]]),
        Series::from_rows("b", vec![category(), count()], vec![vec!["x".into(), 20.into()]]),
    ];
    let settings = ChartSettings::default().with_stack_type(StackType::Stacked);
    let d = classify(
        &series,
        &settings,
        &RawDatum::point("x", 20),
        &MarkElement::new(1, MarkKind::Bar).in_stack(1),
        &TriggerEvent::mouse_move(0.0, 0.0),
    );
    assert_eq!(d.fields.unwrap()[1].value, CellValue::Number(20.0));
}
