// File: crates/tooltip-core/src/lib.rs
// Summary: Core library entry point; classifies chart hover/click payloads into interaction
// descriptors and wires listeners onto a chart surface.

pub mod classify;
pub mod column;
pub mod datum;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod mark;
pub mod policy;
pub mod series;
pub mod settings;
pub mod surface;
pub mod value;
pub mod wiring;

pub use classify::{ClassifyContext, Classifier, MarkOrigin};
pub use column::{BaseType, Column, ColumnSource, FieldRef};
pub use datum::{DatumShape, KeyTuple, PointData, RawDatum};
pub use descriptor::{Anchor, Dimension, Field, InteractionDescriptor, SeriesEmphasis};
pub use error::{InteractionError, InteractionResult};
pub use format::{DefaultFormatter, FormatOptions, NumberStyle, ValueFormatter};
pub use mark::{DomSeriesIndex, ElementId, MarkElement, MarkKind, SeriesIndexResolver, TriggerEvent, TriggerKind};
pub use policy::{hover_policy, setup_tooltips, BrushState, NoBrush, TooltipProps};
pub use series::{Breakout, Row, RowOrigin, Series, SeriesData};
pub use settings::{ChartSettings, SeriesSettings, ShapeFlags, StackType};
pub use surface::{RenderedMark, RetainedSurface};
pub use value::CellValue;
pub use wiring::{attach, presentation_hints, ChartSurface, Cursor, MarkEvent, PresentationHints, TooltipBinding};
