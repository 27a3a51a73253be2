use super::Outcome;
use crate::dom::{Document, NodeId, Query};
use crate::host::Window;
use crate::observer::{IntersectionEntry, RootMargin, topmost};
use crate::page::Page;

pub const SECTION_CLASS: &str = "section";
pub const NAV_CLASS: &str = "table-of-contents";
pub const ACTIVE_CLASS: &str = "active";

/// The section a batch highlights: the topmost intersecting one. `None` leaves the
/// current highlight untouched.
#[must_use]
pub fn choose_active(entries: &[IntersectionEntry]) -> Option<NodeId> {
    topmost(entries).map(|entry| entry.target)
}

/// Moves the `active` class to the nav link whose href is `#<id>` of `section`.
/// Every link loses `active` first, so at most one link is active afterwards.
pub fn highlight<D: Document>(document: &mut D, links: &[NodeId], section: NodeId) -> Option<NodeId> {
    for &link in links {
        document.remove_class(link, ACTIVE_CLASS);
    }

    let href = format!("#{}", document.attribute(section, "id")?);
    let link = links
        .iter()
        .copied()
        .find(|&link| document.attribute(link, "href").as_deref() == Some(href.as_str()))?;
    document.add_class(link, ACTIVE_CLASS);
    Some(link)
}

/// Tracks which `.section` sits in the reading band and mirrors it on the
/// `.table-of-contents a` links.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let sections = page.document().query_all(Query::Class(SECTION_CLASS));
    if sections.is_empty() {
        return Outcome::missing(Query::Class(SECTION_CLASS));
    }
    let nav = Query::Within { class: NAV_CLASS, tag: "a" };
    let links = page.document().query_all(nav);
    if links.is_empty() {
        return Outcome::missing(nav);
    }

    page.observe(RootMargin::ACTIVE_SECTION, sections, move |ctx, entries| {
        if let Some(section) = choose_active(entries) {
            highlight(ctx.document_mut(), &links, section);
        }
    });

    Outcome::Installed
}
