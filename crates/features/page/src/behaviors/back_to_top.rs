use super::Outcome;
use crate::dom::{Document, Query};
use crate::events::{EventKind, EventTarget};
use crate::host::{ScrollBehavior, Window};
use crate::page::Page;

pub const ELEMENT_ID: &str = "backToTop";
pub const VISIBLE_CLASS: &str = "visible";
pub const VISIBILITY_THRESHOLD: f64 = 300.0;

#[must_use]
pub fn is_visible(scroll_y: f64) -> bool {
    scroll_y >= VISIBILITY_THRESHOLD
}

/// Shows `#backToTop` past the threshold and scrolls smoothly to the top on activation.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let Some(button) = page.document().element_by_id(ELEMENT_ID) else {
        return Outcome::missing(Query::Id(ELEMENT_ID));
    };

    page.add_listener(EventTarget::Window, EventKind::Scroll, move |ctx, _| {
        let visible = is_visible(ctx.window().scroll_y());
        let document = ctx.document_mut();
        if visible {
            document.add_class(button, VISIBLE_CLASS);
        } else {
            document.remove_class(button, VISIBLE_CLASS);
        }
    });

    page.add_listener(EventTarget::Node(button), EventKind::Click, |ctx, _| {
        ctx.window_mut().scroll_to(0.0, ScrollBehavior::Smooth);
    });

    Outcome::Installed
}
