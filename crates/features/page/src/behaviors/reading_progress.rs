use super::Outcome;
use crate::dom::Document;
use crate::events::{EventKind, EventTarget};
use crate::host::Window;
use crate::page::Page;

pub const BAR_CLASS: &str = "reading-progress";

const BAR_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "0%"),
    ("height", "4px"),
    (
        "background",
        "linear-gradient(90deg, var(--primary-color) 0%, var(--secondary-color) 50%, var(--accent-color) 100%)",
    ),
    ("z-index", "9999"),
    ("transition", "width 0.1s ease"),
];

/// Share of the scrollable range already scrolled, in `[0, 100]`.
///
/// Without scrollable overflow (or with non-finite inputs) the result is `0`.
#[must_use]
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// CSS width for a percentage, e.g. `50%`.
#[must_use]
pub fn width(percent: f64) -> String {
    format!("{percent}%")
}

/// Injects the fixed progress bar and keeps its width in step with scrolling.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let document = page.document_mut();
    let bar = document.create_element("div");
    document.add_class(bar, BAR_CLASS);
    document.set_styles(bar, BAR_STYLE);
    let body = document.body();
    document.append_child(body, bar);

    page.add_listener(EventTarget::Window, EventKind::Scroll, move |ctx, _| {
        let window = ctx.window();
        let percent = progress_percent(window.scroll_y(), window.document_height(), window.viewport_height());
        ctx.document_mut().set_style(bar, "width", &width(percent));
    });

    Outcome::Installed
}
