// File: crates/tooltip-core/src/surface.rs
// Summary: In-memory retained surface: rendered marks with their datums, listeners and cursors.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::datum::RawDatum;
use crate::mark::{ElementId, MarkElement, MarkKind, TriggerEvent, TriggerKind};
use crate::wiring::{ChartSurface, Cursor, MarkEvent, MarkHandler};

#[derive(Clone, Debug)]
pub struct RenderedMark {
    pub element: MarkElement,
    pub datum: RawDatum,
}

/// Listeners of one mark, keyed by trigger and namespace.
type Listeners = BTreeMap<(TriggerKind, String), MarkHandler>;

pub struct RetainedSurface {
    marks: Vec<RenderedMark>,
    listeners: HashMap<ElementId, Listeners>,
    cursors: HashMap<ElementId, Cursor>,
    native_tooltips: bool,
}

impl Default for RetainedSurface {
    fn default() -> Self { Self::new() }
}

impl RetainedSurface {
    /// A fresh surface renders its own `<title>`-style tooltips until told otherwise.
    pub fn new() -> Self {
        Self { marks: Vec::new(), listeners: HashMap::new(), cursors: HashMap::new(), native_tooltips: true }
    }

    pub fn add_mark(&mut self, element: MarkElement, datum: RawDatum) -> ElementId {
        let id = element.id;
        self.marks.push(RenderedMark { element, datum });
        id
    }

    pub fn marks(&self) -> &[RenderedMark] { &self.marks }

    pub fn mark(&self, id: ElementId) -> Option<&RenderedMark> { self.marks.iter().find(|m| m.element.id == id) }

    pub fn has_native_tooltips(&self) -> bool { self.native_tooltips }

    pub fn cursor(&self, id: ElementId) -> Cursor { self.cursors.get(&id).copied().unwrap_or_default() }

    /// Number of listeners bound on `id` for `trigger`, across namespaces.
    pub fn listener_count(&self, id: ElementId, trigger: TriggerKind) -> usize {
        self.listeners.get(&id).map_or(0, |m| m.keys().filter(|(t, _)| *t == trigger).count())
    }

    /// Fire `trigger` on mark `id`; returns how many listeners ran.
    pub fn dispatch(&self, id: ElementId, trigger: TriggerEvent) -> usize {
        let Some(mark) = self.mark(id) else { return 0 };
        let handlers: Vec<MarkHandler> = self
            .listeners
            .get(&id)
            .map(|m| m.iter().filter(|((t, _), _)| *t == trigger.kind).map(|(_, h)| h.clone()).collect())
            .unwrap_or_default();
        trace!(element = id.0, trigger = ?trigger.kind, listeners = handlers.len(), "dispatch");
        let ev = MarkEvent { datum: &mark.datum, element: &mark.element, trigger: &trigger };
        for h in &handlers {
            h(&ev);
        }
        handlers.len()
    }

    fn matching(&self, marks: &[MarkKind]) -> Vec<ElementId> {
        self.marks
            .iter()
            .filter(|m| marks.iter().any(|&k| m.element.is(k)))
            .map(|m| m.element.id)
            .collect()
    }
}

impl ChartSurface for RetainedSurface {
    fn remove_native_tooltips(&mut self) { self.native_tooltips = false; }

    fn on(&mut self, marks: &[MarkKind], trigger: TriggerKind, namespace: &str, handler: MarkHandler) {
        for id in self.matching(marks) {
            self.listeners
                .entry(id)
                .or_default()
                .insert((trigger, namespace.to_string()), handler.clone());
        }
    }

    fn set_cursor(&mut self, marks: &[MarkKind], cursor: Cursor) {
        for id in self.matching(marks) {
            self.cursors.insert(id, cursor);
        }
    }
}
