use super::Outcome;
use crate::dom::{Document, NodeId, Query};
use crate::error::PageErrorExt;
use crate::events::{EventKind, EventTarget};
use crate::host::Window;
use crate::page::{Page, PageContext};
use crate::tasks::TimerKey;
use std::time::Duration;

pub const CONFIRMATION: &str = "✓ Copied!";
pub const CONFIRMATION_COLOR: &str = "#10b981";
pub const REVERT_AFTER: Duration = Duration::from_millis(2000);
pub const TITLE: &str = "Click to copy email";

/// Holds the label shown before the first confirmation.
pub const LABEL_ATTRIBUTE: &str = "data-copy-label";
const MAILTO: &str = "mailto:";
const REVERT_TIMER: &str = "copy-email-revert";

/// Address part of a `mailto:` href, without query parameters.
#[must_use]
pub fn address(href: &str) -> Option<&str> {
    let rest = href.strip_prefix(MAILTO)?;
    let address = rest.split_once('?').map_or(rest, |(address, _)| address);
    (!address.is_empty()).then_some(address)
}

/// Timer key of the label revert for `link`.
#[must_use]
pub const fn revert_timer(link: NodeId) -> TimerKey {
    TimerKey::new(link, REVERT_TIMER)
}

/// Makes every `mailto:` link copy its address instead of opening a mail client.
pub fn install<D: Document + 'static, W: Window + 'static>(page: &mut Page<D, W>) -> Outcome {
    let query = Query::LinkHrefPrefix(MAILTO);
    let links = page.document().query_all(query);
    if links.is_empty() {
        return Outcome::missing(query);
    }

    for link in links {
        let document = page.document_mut();
        document.set_style(link, "cursor", "pointer");
        document.set_attribute(link, "title", TITLE);
        // Detached; keeps the link's child elements while the confirmation is shown.
        let holder = document.create_element("span");

        page.add_listener(EventTarget::Node(link), EventKind::Click, move |ctx, event| {
            event.prevent_default();

            let Some(href) = ctx.document().attribute(link, "href") else {
                return;
            };
            let Some(email) = address(&href) else {
                return;
            };

            let write = ctx.clipboard().write_text(email);
            ctx.spawn(write, move |ctx, result| match result.context("Failed to copy email") {
                Ok(()) => show_confirmation(ctx, link, holder),
                Err(err) => ctx.report(err),
            });
        });
    }

    Outcome::Installed
}

fn show_confirmation<D: Document + 'static, W: Window + 'static>(
    ctx: &mut PageContext<D, W>,
    link: NodeId,
    holder: NodeId,
) {
    let document = ctx.document_mut();
    if document.attribute(link, LABEL_ATTRIBUTE).is_none() {
        let original = document.text(link);
        document.set_attribute(link, LABEL_ATTRIBUTE, &original);
        stash_children(document, link, holder);
    }
    document.set_text(link, CONFIRMATION);
    document.set_style(link, "color", CONFIRMATION_COLOR);

    ctx.schedule(revert_timer(link), REVERT_AFTER, move |ctx| restore_label(ctx.document_mut(), link, holder));
}

/// Moves the link's child elements into `holder`, remembering the link's own text run.
fn stash_children<D: Document>(document: &mut D, link: NodeId, holder: NodeId) {
    let children = document.children(link);
    if children.is_empty() {
        return;
    }
    for child in children {
        document.append_child(holder, child);
    }
    let own = document.text(link);
    document.set_attribute(holder, LABEL_ATTRIBUTE, &own);
}

fn restore_label<D: Document>(document: &mut D, link: NodeId, holder: NodeId) {
    if let Some(original) = document.attribute(link, LABEL_ATTRIBUTE) {
        let stashed = document.children(holder);
        if stashed.is_empty() {
            document.set_text(link, &original);
        } else {
            let own = document.attribute(holder, LABEL_ATTRIBUTE).unwrap_or_default();
            document.set_text(link, &own);
            for child in stashed {
                document.append_child(link, child);
            }
            document.remove_attribute(holder, LABEL_ATTRIBUTE);
        }
        document.remove_attribute(link, LABEL_ATTRIBUTE);
    }
    document.set_style(link, "color", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_drops_scheme_and_query() {
        assert_eq!(address("mailto:privacy@example.com"), Some("privacy@example.com"));
        assert_eq!(address("mailto:dpo@example.com?subject=GDPR"), Some("dpo@example.com"));
        assert_eq!(address("mailto:"), None);
        assert_eq!(address("https://example.com"), None);
    }
}
