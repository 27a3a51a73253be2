use super::Outcome;
use crate::dom::{Document, Query};
use crate::events::{EventKind, EventTarget};
use crate::host::{ScrollBehavior, Window};
use crate::page::Page;

pub const SCROLL_MARGIN: f64 = 20.0;
const SAME_PAGE_PREFIX: &str = "#";

/// Scroll offset that lands `element_top` just below the top edge.
#[must_use]
pub fn target_offset(element_top: f64) -> f64 {
    element_top - SCROLL_MARGIN
}

/// The element id a same-page href points to; `None` for `#` alone or other hrefs.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix(SAME_PAGE_PREFIX).filter(|id| !id.is_empty())
}

/// Turns every `a[href^="#"]` into an in-page smooth scroll. Navigation is always
/// suppressed, even when the target is missing.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let query = Query::LinkHrefPrefix(SAME_PAGE_PREFIX);
    let links = page.document().query_all(query);
    if links.is_empty() {
        return Outcome::missing(query);
    }

    for link in links {
        page.add_listener(EventTarget::Node(link), EventKind::Click, move |ctx, event| {
            event.prevent_default();

            let Some(href) = ctx.document().attribute(link, "href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = ctx.document().element_by_id(id) else {
                tracing::debug!(%href, "Anchor target not found");
                return;
            };

            let top = target_offset(ctx.document().offset_top(target));
            let window = ctx.window_mut();
            window.scroll_to(top, ScrollBehavior::Smooth);
            window.push_fragment(&href);
        });
    }

    Outcome::Installed
}
