// File: crates/tooltip-core/src/wiring.rs
// Summary: Binds hover/click listeners on a chart surface and forwards classified descriptors.
// Notes:
// - Single-threaded: listeners and host callbacks are `Rc` closures run on the event's own turn.
// - Every binding goes through one namespace, so re-attaching after a redraw replaces listeners.

use std::rc::Rc;

use tracing::{trace, warn};

use crate::classify::{ClassifyContext, Classifier, MarkOrigin};
use crate::datum::RawDatum;
use crate::descriptor::InteractionDescriptor;
use crate::mark::{MarkElement, MarkKind, TriggerEvent, TriggerKind};
use crate::series::Series;
use crate::settings::{ChartSettings, ShapeFlags};

pub const TOOLTIP_NAMESPACE: &str = "tooltips";

/// Receives the hovered descriptor, or `None` when the pointer leaves a mark.
pub type HoverCallback = Rc<dyn Fn(Option<InteractionDescriptor>)>;
pub type ClickCallback = Rc<dyn Fn(InteractionDescriptor)>;

/// What a listener sees when the surface dispatches an event on a mark.
#[derive(Clone, Copy, Debug)]
pub struct MarkEvent<'a> {
    pub datum: &'a RawDatum,
    pub element: &'a MarkElement,
    pub trigger: &'a TriggerEvent,
}

pub type MarkHandler = Rc<dyn Fn(&MarkEvent<'_>)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Rendering surface the tooltips attach to.
pub trait ChartSurface {
    /// Drop whatever built-in tooltip affordance the surface renders on its own.
    fn remove_native_tooltips(&mut self);

    /// Bind `handler` for `trigger` on every mark of the given kinds. A handler already bound
    /// under the same trigger and namespace on a mark is replaced.
    fn on(&mut self, marks: &[MarkKind], trigger: TriggerKind, namespace: &str, handler: MarkHandler);

    fn set_cursor(&mut self, marks: &[MarkKind], cursor: Cursor);
}

/// Visual hints for clickable marks, applied by the wiring rather than the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationHints {
    pub cursors: Vec<(MarkKind, Cursor)>,
}

pub fn presentation_hints() -> PresentationHints {
    PresentationHints {
        cursors: CLICK_MARKS.iter().chain(PRESS_MARKS).map(|&k| (k, Cursor::Pointer)).collect(),
    }
}

/// Marks whose click fires on `click`.
const CLICK_MARKS: &[MarkKind] = &[MarkKind::Dot, MarkKind::Bubble];
/// Bars fire on press, since their hit testing competes with brush gestures.
const PRESS_MARKS: &[MarkKind] = &[MarkKind::Bar];

/// Everything a listener needs to classify an event; shared by all listeners of one attachment.
#[derive(Clone)]
pub struct TooltipBinding {
    pub series: Rc<Vec<Series>>,
    pub settings: Rc<ChartSettings>,
    pub flags: ShapeFlags,
    pub classifier: Rc<Classifier>,
}

impl TooltipBinding {
    pub fn new(series: Rc<Vec<Series>>, settings: Rc<ChartSettings>, flags: ShapeFlags) -> Self {
        Self { series, settings, flags, classifier: Rc::new(Classifier::new()) }
    }

    pub fn with_classifier(mut self, classifier: Rc<Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    fn classify(&self, ev: &MarkEvent<'_>) -> Option<InteractionDescriptor> {
        let ctx = ClassifyContext::new(&self.series, &self.settings, self.flags);
        match self.classifier.classify(ev.datum, &ctx, MarkOrigin::new(ev.element, ev.trigger)) {
            Ok(d) => Some(d),
            Err(e) => {
                warn!(element = ev.element.id.0, error = %e, "failed to classify chart interaction");
                None
            }
        }
    }
}

pub fn attach(
    surface: &mut dyn ChartSurface,
    binding: TooltipBinding,
    on_hover: Option<HoverCallback>,
    on_click: Option<ClickCallback>,
) {
    surface.remove_native_tooltips();
    let binding = Rc::new(binding);

    if let Some(on_hover) = on_hover {
        trace!(namespace = TOOLTIP_NAMESPACE, "binding hover listeners");
        let b = Rc::clone(&binding);
        let hover = Rc::clone(&on_hover);
        surface.on(
            &MarkKind::ALL,
            TriggerKind::MouseMove,
            TOOLTIP_NAMESPACE,
            Rc::new(move |ev: &MarkEvent<'_>| {
                if let Some(d) = b.classify(ev) {
                    hover(Some(d));
                }
            }),
        );
        surface.on(
            &MarkKind::ALL,
            TriggerKind::MouseLeave,
            TOOLTIP_NAMESPACE,
            Rc::new(move |_: &MarkEvent<'_>| on_hover(None)),
        );
    }

    if let Some(on_click) = on_click {
        trace!(namespace = TOOLTIP_NAMESPACE, "binding click listeners");
        let b = Rc::clone(&binding);
        let handler: MarkHandler = Rc::new(move |ev: &MarkEvent<'_>| match b.classify(ev) {
            Some(d) if !d.is_empty() => on_click(d),
            _ => trace!(element = ev.element.id.0, "nothing to forward for click"),
        });
        surface.on(CLICK_MARKS, TriggerKind::Click, TOOLTIP_NAMESPACE, Rc::clone(&handler));
        surface.on(PRESS_MARKS, TriggerKind::MouseDown, TOOLTIP_NAMESPACE, handler);
        for (kind, cursor) in presentation_hints().cursors {
            surface.set_cursor(&[kind], cursor);
        }
    }
}
