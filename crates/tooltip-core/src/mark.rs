// File: crates/tooltip-core/src/mark.rs
// Summary: Rendered marks (class-tagged elements), trigger events, and series index resolution.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Bar,
    /// A point on a line series.
    Dot,
    Area,
    /// The line path itself.
    Line,
    Bubble,
}

impl MarkKind {
    pub const ALL: [MarkKind; 5] = [MarkKind::Bar, MarkKind::Dot, MarkKind::Area, MarkKind::Line, MarkKind::Bubble];

    pub fn class_name(self) -> &'static str {
        match self {
            MarkKind::Bar => "bar",
            MarkKind::Dot => "dot",
            MarkKind::Area => "area",
            MarkKind::Line => "line",
            MarkKind::Bubble => "bubble",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

/// DOM-like element a mark was rendered as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkElement {
    pub id: ElementId,
    pub classes: Vec<String>,
    /// Position of the enclosing stack group among its siblings (`stack-N`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_position: Option<usize>,
}

impl MarkElement {
    pub fn new(id: u64, kind: MarkKind) -> Self {
        Self { id: ElementId(id), classes: vec![kind.class_name().to_string()], stack_position: None }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn in_stack(mut self, position: usize) -> Self {
        self.stack_position = Some(position);
        self
    }

    pub fn has_class(&self, class: &str) -> bool { self.classes.iter().any(|c| c == class) }

    pub fn is(&self, kind: MarkKind) -> bool { self.has_class(kind.class_name()) }

    /// Series position encoded as an `_N` class tag.
    pub fn series_class(&self) -> Option<usize> {
        self.classes
            .iter()
            .find_map(|c| c.strip_prefix('_').and_then(|n| n.parse::<usize>().ok()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    MouseMove,
    MouseLeave,
    Click,
    MouseDown,
}

impl TriggerKind {
    pub fn is_hover(self) -> bool { matches!(self, TriggerKind::MouseMove) }
}

/// Triggering pointer event with its surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerEvent {
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    pub x: f64,
    pub y: f64,
}

impl TriggerEvent {
    pub fn new(kind: TriggerKind, x: f64, y: f64) -> Self { Self { kind, x, y } }
    pub fn mouse_move(x: f64, y: f64) -> Self { Self::new(TriggerKind::MouseMove, x, y) }
    pub fn mouse_leave(x: f64, y: f64) -> Self { Self::new(TriggerKind::MouseLeave, x, y) }
    pub fn click(x: f64, y: f64) -> Self { Self::new(TriggerKind::Click, x, y) }
    pub fn mouse_down(x: f64, y: f64) -> Self { Self::new(TriggerKind::MouseDown, x, y) }
}

/// Maps an originating mark to the index of the series it was drawn for.
pub trait SeriesIndexResolver {
    fn series_index(&self, element: &MarkElement, is_stacked: bool) -> usize;
}

/// Reads the position the renderer encoded on the element: the stack group for stacked
/// charts, the `_N` class otherwise. Anything unmarked belongs to the first series.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSeriesIndex;

impl SeriesIndexResolver for DomSeriesIndex {
    fn series_index(&self, element: &MarkElement, is_stacked: bool) -> usize {
        if is_stacked {
            if let Some(p) = element.stack_position { return p; }
        }
        element.series_class().unwrap_or(0)
    }
}

impl<F: Fn(&MarkElement, bool) -> usize> SeriesIndexResolver for F {
    fn series_index(&self, element: &MarkElement, is_stacked: bool) -> usize { self(element, is_stacked) }
}
