// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV as a single bar series, replays hover/leave/press on every bar and prints descriptors as JSON.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tooltip_core::{
    setup_tooltips, CellValue, ChartSettings, Column, ElementId, MarkElement, MarkKind, NoBrush, RawDatum,
    RetainedSurface, Series, TooltipProps, TriggerEvent,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tooltip-demo")]
#[command(about = "Replay pointer events over a CSV bar chart and print tooltip descriptors", long_about = None)]
struct Cli {
    /// CSV file; first column is x, second the measure
    #[arg(value_name = "FILE", default_value = "crates/demo/data/sample.csv")]
    input: PathBuf,

    /// Chart settings JSON file
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match &args.settings {
        Some(p) => load_settings(p).with_context(|| format!("failed to load settings '{}'", p.display()))?,
        None => ChartSettings::default(),
    };

    let series = load_series(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if series.data.rows.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }
    info!(rows = series.data.rows.len(), cols = series.cols().len(), "loaded series");

    // one bar per row, positioned by the row's x and measure
    let mut surface = RetainedSurface::new();
    for (i, row) in series.data.rows.iter().enumerate() {
        let x = row.values.first().cloned().unwrap_or_default();
        let y = row.values.get(1).cloned().unwrap_or_default();
        surface.add_mark(MarkElement::new(i as u64, MarkKind::Bar), RawDatum::point(x, y));
    }

    let out: Rc<RefCell<Vec<String>>> = Rc::default();
    let (hover_out, click_out) = (Rc::clone(&out), Rc::clone(&out));
    let props = TooltipProps::new(vec![series], settings)
        .on_hover_change(move |d| {
            let line = d.map(|d| d.to_json()).unwrap_or_else(|| "null".to_string());
            hover_out.borrow_mut().push(format!("hover {line}"));
        })
        .on_visualization_click(move |d| click_out.borrow_mut().push(format!("click {}", d.to_json())));
    setup_tooltips(&mut surface, &props, Rc::new(NoBrush));

    for mark in surface.marks() {
        replay(&surface, mark.element.id);
    }
    for line in out.borrow().iter() {
        println!("{line}");
    }
    Ok(())
}

fn replay(surface: &RetainedSurface, id: ElementId) {
    let (x, y) = (id.0 as f64 * 40.0 + 20.0, 100.0);
    for event in [TriggerEvent::mouse_move(x, y), TriggerEvent::mouse_leave(x, y), TriggerEvent::mouse_down(x, y)] {
        if surface.dispatch(id, event) == 0 {
            warn!(id = id.0, trigger = ?event.kind, "no listener bound");
        }
    }
}

fn load_settings(path: &Path) -> Result<ChartSettings> {
    let text = std::fs::read_to_string(path)?;
    Ok(ChartSettings::from_json(&text)?)
}

/// Load a headered CSV; the first column becomes x, the second the measure.
fn load_series(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.len() < 2 {
        anyhow::bail!("need at least two columns, found {}", headers.len());
    }

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(parse_cell).collect());
    }

    let cols = headers.iter().enumerate().map(|(i, name)| infer_column(name, i, &rows)).collect();
    // booleans stay as strings; the classifier coerces them against the column type
    Ok(Series::from_rows(path.file_stem().and_then(|s| s.to_str()).unwrap_or("series"), cols, rows))
}

fn parse_cell(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(n) = s.parse::<f64>() {
        return CellValue::Number(n);
    }
    if let Some(t) = parse_time(s) {
        return CellValue::Temporal(t);
    }
    CellValue::text(s)
}

fn parse_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

fn infer_column(name: &str, index: usize, rows: &[Vec<CellValue>]) -> Column {
    let cells = || rows.iter().filter_map(|r| r.get(index)).filter(|c| **c != CellValue::Null);
    if cells().all(|c| matches!(c, CellValue::Text(t) if t == "true" || t == "false")) && cells().next().is_some() {
        Column::boolean(name)
    } else if cells().all(|c| matches!(c, CellValue::Number(_))) {
        Column::number(name)
    } else if cells().all(CellValue::is_temporal) {
        Column::temporal(name)
    } else {
        Column::text(name)
    }
}
