// File: crates/tooltip-core/src/policy.rs
// Summary: Host-facing setup: derives shape flags from settings and wraps the hover callback
// with the brushing/line-anchor policy before attaching to the surface.

use std::cell::Cell;
use std::rc::Rc;

use tracing::trace;

use crate::classify::Classifier;
use crate::descriptor::InteractionDescriptor;
use crate::mark::MarkKind;
use crate::series::Series;
use crate::settings::{ChartSettings, ShapeFlags};
use crate::wiring::{attach, ChartSurface, ClickCallback, HoverCallback, TooltipBinding};

/// Whether a brush/range-selection gesture currently owns the surface.
pub trait BrushState {
    fn is_brushing(&self) -> bool;
}

impl BrushState for Cell<bool> {
    fn is_brushing(&self) -> bool { self.get() }
}

impl<F: Fn() -> bool> BrushState for F {
    fn is_brushing(&self) -> bool { self() }
}

/// Never brushing; for surfaces without a brush.
pub struct NoBrush;

impl BrushState for NoBrush {
    fn is_brushing(&self) -> bool { false }
}

pub struct TooltipProps {
    pub settings: Rc<ChartSettings>,
    pub series: Rc<Vec<Series>>,
    pub is_scalar_series: bool,
    pub on_hover_change: Option<HoverCallback>,
    pub on_visualization_click: Option<ClickCallback>,
    pub classifier: Rc<Classifier>,
}

impl TooltipProps {
    pub fn new(series: Vec<Series>, settings: ChartSettings) -> Self {
        Self {
            settings: Rc::new(settings),
            series: Rc::new(series),
            is_scalar_series: false,
            on_hover_change: None,
            on_visualization_click: None,
            classifier: Rc::new(Classifier::new()),
        }
    }

    pub fn scalar_series(mut self, is_scalar_series: bool) -> Self {
        self.is_scalar_series = is_scalar_series;
        self
    }

    pub fn on_hover_change(mut self, f: impl Fn(Option<InteractionDescriptor>) + 'static) -> Self {
        self.on_hover_change = Some(Rc::new(f));
        self
    }

    pub fn on_visualization_click(mut self, f: impl Fn(InteractionDescriptor) + 'static) -> Self {
        self.on_visualization_click = Some(Rc::new(f));
        self
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = Rc::new(classifier);
        self
    }

    pub fn shape_flags(&self) -> ShapeFlags {
        ShapeFlags::detect(&self.settings, self.series.len()).with_scalar_series(self.is_scalar_series)
    }
}

/// Hover callback that stays silent while brushing, and drops the element anchor of line
/// paths (line hovers rely on the crosshair instead of a positioned tooltip).
pub fn hover_policy(on_hover: HoverCallback, brush: Rc<dyn BrushState>) -> HoverCallback {
    Rc::new(move |hovered: Option<InteractionDescriptor>| {
        if brush.is_brushing() {
            trace!("hover suppressed while brushing");
            return;
        }
        let hovered = hovered.map(|d| {
            if d.anchor.as_ref().is_some_and(|a| a.is_element_of(MarkKind::Line)) {
                d.without_element_anchor()
            } else {
                d
            }
        });
        on_hover(hovered);
    })
}

/// Attach tooltips for one chart instance. Safe to call on every redraw.
pub fn setup_tooltips(surface: &mut dyn ChartSurface, props: &TooltipProps, brush: Rc<dyn BrushState>) {
    let flags = props.shape_flags();
    let binding = TooltipBinding::new(Rc::clone(&props.series), Rc::clone(&props.settings), flags)
        .with_classifier(Rc::clone(&props.classifier));
    let on_hover = props.on_hover_change.clone().map(|cb| hover_policy(cb, brush));
    attach(surface, binding, on_hover, props.on_visualization_click.clone());
}
