//! Intersection observation computed from layout offsets.

use crate::dom::NodeId;
use crate::page::PageContext;
use fxhash::FxHashMap;
use std::rc::Rc;

/// Root margin as fractions of the viewport height; negative values shrink the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

impl RootMargin {
    /// `-20% 0px -70% 0px`: the band between 20% and 30% of the viewport.
    pub const ACTIVE_SECTION: Self = Self { top: -0.20, bottom: -0.70 };

    /// Document-space `(top, bottom)` of the observed band.
    #[must_use]
    pub fn band(self, scroll_y: f64, viewport_height: f64) -> (f64, f64) {
        (
            viewport_height.mul_add(-self.top, scroll_y),
            viewport_height.mul_add(1.0 + self.bottom, scroll_y),
        )
    }
}

/// One observed element's state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
    /// Bounding top relative to the viewport.
    pub top: f64,
}

/// Strict overlap of `[top, top + height)` with the band.
#[must_use]
pub fn intersects(band: (f64, f64), top: f64, height: f64) -> bool {
    top < band.1 && top + height > band.0
}

/// The topmost intersecting entry; the first one in batch order on ties.
#[must_use]
pub fn topmost(entries: &[IntersectionEntry]) -> Option<&IntersectionEntry> {
    entries.iter().filter(|e| e.is_intersecting).min_by(|a, b| a.top.total_cmp(&b.top))
}

pub type ObserverCallback<D, W> = Rc<dyn Fn(&mut PageContext<D, W>, &[IntersectionEntry])>;

pub(crate) struct Observer<D, W> {
    pub(crate) margin: RootMargin,
    pub(crate) targets: Vec<NodeId>,
    pub(crate) states: FxHashMap<NodeId, bool>,
    pub(crate) callback: ObserverCallback<D, W>,
}

impl<D, W> Observer<D, W> {
    pub(crate) fn new(margin: RootMargin, targets: Vec<NodeId>, callback: ObserverCallback<D, W>) -> Self {
        Self { margin, targets, states: FxHashMap::default(), callback }
    }

    /// Keeps only entries that change this observer's recorded state. The first report
    /// for a target always counts.
    pub(crate) fn accept(&mut self, entries: impl IntoIterator<Item = IntersectionEntry>) -> Vec<IntersectionEntry> {
        entries
            .into_iter()
            .filter(|entry| self.targets.contains(&entry.target))
            .filter(|entry| self.states.insert(entry.target, entry.is_intersecting) != Some(entry.is_intersecting))
            .collect()
    }
}
