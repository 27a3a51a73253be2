use super::Outcome;
use crate::dom::{Document, Query};
use crate::events::{EventKind, EventTarget};
use crate::host::Window;
use crate::page::Page;

pub const LINK_CLASS: &str = "skip-link";
pub const LABEL: &str = "Skip to main content";
pub const CONTENT_CLASS: &str = "content";
pub const CONTENT_ID: &str = "content";
pub const HIDDEN_TOP: &str = "-40px";
pub const SHOWN_TOP: &str = "0";

const LINK_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", HIDDEN_TOP),
    ("left", "0"),
    ("background", "var(--primary-color)"),
    ("color", "white"),
    ("padding", "0.5rem 1rem"),
    ("text-decoration", "none"),
    ("z-index", "10000"),
];

/// Puts a keyboard skip link first in the body and makes `.content` its focus target.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let document = page.document_mut();
    let link = document.create_element("a");
    document.set_attribute(link, "href", &format!("#{CONTENT_ID}"));
    document.set_text(link, LABEL);
    document.add_class(link, LINK_CLASS);
    document.set_styles(link, LINK_STYLE);
    let body = document.body();
    document.prepend_child(body, link);

    if let Some(content) = document.query(Query::Class(CONTENT_CLASS)) {
        document.set_attribute(content, "id", CONTENT_ID);
        document.set_attribute(content, "tabindex", "-1");
    }

    let target = EventTarget::Node(link);
    page.add_listener(target, EventKind::Focus, move |ctx, _| {
        ctx.document_mut().set_style(link, "top", SHOWN_TOP);
    });
    page.add_listener(target, EventKind::Blur, move |ctx, _| {
        ctx.document_mut().set_style(link, "top", HIDDEN_TOP);
    });

    Outcome::Installed
}
