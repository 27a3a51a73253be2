use super::Outcome;
use crate::dom::{Document, NodeId, Query};
use crate::events::{EventKind, EventTarget};
use crate::host::Window;
use crate::page::Page;

pub const INDICATOR_CLASS: &str = "collapse-indicator";
pub const INDICATOR_GLYPH: &str = " ▼";
pub const EXPANDED_ROTATION: &str = "rotate(0deg)";
pub const COLLAPSED_ROTATION: &str = "rotate(-90deg)";
const EXPANDED_ATTRIBUTE: &str = "aria-expanded";

const INDICATOR_STYLE: &[(&str, &str)] = &[
    ("font-size", "0.8em"),
    ("color", "var(--primary-color)"),
    ("transition", "transform 0.3s ease"),
];

#[must_use]
pub fn is_expanded<D: Document>(document: &D, heading: NodeId) -> bool {
    document.attribute(heading, EXPANDED_ATTRIBUTE).as_deref() != Some("false")
}

/// Flips a section open or closed; returns whether it is expanded afterwards.
pub fn toggle<D: Document>(document: &mut D, heading: NodeId, indicator: NodeId) -> bool {
    let expand = !is_expanded(document, heading);
    let display = if expand { "" } else { "none" };
    for sibling in document.following_siblings(heading) {
        document.set_style(sibling, "display", display);
    }
    document.set_style(indicator, "transform", if expand { EXPANDED_ROTATION } else { COLLAPSED_ROTATION });
    document.set_attribute(heading, EXPANDED_ATTRIBUTE, if expand { "true" } else { "false" });
    expand
}

/// Makes each `.section h2` fold the rest of its section.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let query = Query::Within { class: "section", tag: "h2" };
    let headings = page.document().query_all(query);
    if headings.is_empty() {
        return Outcome::missing(query);
    }

    for heading in headings {
        let document = page.document_mut();
        document.set_styles(heading, &[("cursor", "pointer"), ("user-select", "none")]);
        document.set_attribute(heading, EXPANDED_ATTRIBUTE, "true");

        let indicator = document.create_element("span");
        document.add_class(indicator, INDICATOR_CLASS);
        document.set_text(indicator, INDICATOR_GLYPH);
        document.set_styles(indicator, INDICATOR_STYLE);
        document.append_child(heading, indicator);

        page.add_listener(EventTarget::Node(heading), EventKind::Click, move |ctx, _| {
            toggle(ctx.document_mut(), heading, indicator);
        });
    }

    Outcome::Installed
}
