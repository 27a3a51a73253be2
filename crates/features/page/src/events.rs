use crate::dom::NodeId;
use crate::page::PageContext;
use fxhash::FxHashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Scroll,
    Click,
    Focus,
    Blur,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// Only activation travels up the tree; focus and hover stay on their target.
    #[must_use]
    pub const fn bubbles(self) -> bool {
        matches!(self, Self::Click)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Window,
    Node(NodeId),
}

/// An event as seen by a listener.
#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    target: EventTarget,
    current_target: EventTarget,
    default_prevented: bool,
}

impl Event {
    #[must_use]
    pub const fn new(kind: EventKind, target: EventTarget) -> Self {
        Self { kind, target, current_target: target, default_prevented: false }
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub const fn target(&self) -> EventTarget {
        self.target
    }

    /// The element whose listener is running.
    #[must_use]
    pub const fn current_target(&self) -> EventTarget {
        self.current_target
    }

    /// Suppresses the default action (link navigation).
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub(crate) const fn set_current_target(&mut self, target: EventTarget) {
        self.current_target = target;
    }
}

pub type Handler<D, W> = Rc<dyn Fn(&mut PageContext<D, W>, &mut Event)>;

/// Listener registry keyed by target and kind, in registration order.
pub(crate) struct Listeners<D, W> {
    handlers: FxHashMap<(EventTarget, EventKind), Vec<Handler<D, W>>>,
}

impl<D, W> Listeners<D, W> {
    pub(crate) fn new() -> Self {
        Self { handlers: FxHashMap::default() }
    }

    pub(crate) fn add(&mut self, target: EventTarget, kind: EventKind, handler: Handler<D, W>) {
        self.handlers.entry((target, kind)).or_default().push(handler);
    }

    /// Snapshot of the handlers, so listeners may register more while dispatching.
    pub(crate) fn snapshot(&self, target: EventTarget, kind: EventKind) -> Vec<Handler<D, W>> {
        self.handlers.get(&(target, kind)).cloned().unwrap_or_default()
    }

    pub(crate) fn count(&self, target: EventTarget, kind: EventKind) -> usize {
        self.handlers.get(&(target, kind)).map_or(0, Vec::len)
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }
}
