use super::Outcome;
use crate::dom::{Document, Query};
use crate::events::{EventKind, EventTarget};
use crate::host::Window;
use crate::page::Page;

pub const HEADER_CLASS: &str = "header";
pub const BUTTON_CLASS: &str = "print-button";
pub const LABEL: &str = "🖨️ Print Policy";
pub const HOVER_TRANSFORM: &str = "translateY(-2px)";

const BUTTON_STYLE: &[(&str, &str)] = &[
    ("margin-top", "1rem"),
    ("padding", "0.75rem 1.5rem"),
    ("background", "linear-gradient(135deg, var(--primary-color) 0%, var(--secondary-color) 100%)"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "6px"),
    ("font-size", "0.95rem"),
    ("font-weight", "600"),
    ("cursor", "pointer"),
    ("transition", "all 0.3s ease"),
    ("box-shadow", "var(--shadow-md)"),
];

/// Appends a print button to `.header`.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let Some(header) = page.document().query(Query::Class(HEADER_CLASS)) else {
        return Outcome::missing(Query::Class(HEADER_CLASS));
    };

    let document = page.document_mut();
    let button = document.create_element("button");
    document.set_text(button, LABEL);
    document.add_class(button, BUTTON_CLASS);
    document.set_styles(button, BUTTON_STYLE);
    document.append_child(header, button);

    let target = EventTarget::Node(button);
    page.add_listener(target, EventKind::MouseEnter, move |ctx, _| {
        ctx.document_mut()
            .set_styles(button, &[("transform", HOVER_TRANSFORM), ("box-shadow", "var(--shadow-lg)")]);
    });
    page.add_listener(target, EventKind::MouseLeave, move |ctx, _| {
        ctx.document_mut().set_styles(button, &[("transform", ""), ("box-shadow", "var(--shadow-md)")]);
    });
    page.add_listener(target, EventKind::Click, |ctx, _| ctx.window_mut().print());

    Outcome::Installed
}
