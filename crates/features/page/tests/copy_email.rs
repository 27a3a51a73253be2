mod common;

use common::{EMAIL, Fixture};
use policy_page::behaviors::copy_email::{self, CONFIRMATION, CONFIRMATION_COLOR, LABEL_ATTRIBUTE, REVERT_AFTER};
use policy_page::{ClipboardError, Document, MemoryClipboard, PageError};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn install_marks_links_copyable() {
    let mut fx = Fixture::new();
    fx.start();

    let doc = fx.page.document();
    assert_eq!(doc.style(fx.email_link, "cursor").as_deref(), Some("pointer"));
    assert_eq!(doc.attribute(fx.email_link, "title").as_deref(), Some("Click to copy email"));
}

#[tokio::test(start_paused = true)]
async fn confirmation_reverts_after_exactly_two_seconds() {
    let mut fx = Fixture::new();
    fx.start();

    let event = fx.page.click(fx.email_link);
    assert!(event.default_prevented());
    assert!(fx.page.window().navigations().is_empty());

    fx.page.settle().await;
    assert_eq!(fx.clipboard.contents().as_deref(), Some(EMAIL));
    assert_eq!(fx.text(fx.email_link), CONFIRMATION);
    assert_eq!(fx.page.document().style(fx.email_link, "color").as_deref(), Some(CONFIRMATION_COLOR));
    assert!(fx.page.is_scheduled(copy_email::revert_timer(fx.email_link)));

    advance(REVERT_AFTER - Duration::from_millis(1)).await;
    fx.page.settle().await;
    assert_eq!(fx.text(fx.email_link), CONFIRMATION);

    advance(Duration::from_millis(1)).await;
    fx.page.settle().await;
    assert_eq!(fx.text(fx.email_link), EMAIL);
    assert!(fx.page.document().style(fx.email_link, "color").is_none());
    assert!(fx.page.document().attribute(fx.email_link, LABEL_ATTRIBUTE).is_none());
    assert!(!fx.page.is_scheduled(copy_email::revert_timer(fx.email_link)));
}

#[tokio::test(start_paused = true)]
async fn repeated_copy_restarts_the_window_and_keeps_the_label() {
    let mut fx = Fixture::new();
    fx.start();

    fx.page.click(fx.email_link);
    fx.page.settle().await;

    advance(Duration::from_millis(1500)).await;
    fx.page.click(fx.email_link);
    fx.page.settle().await;
    assert_eq!(fx.clipboard.writes(), 2);

    advance(Duration::from_millis(600)).await;
    fx.page.settle().await;
    assert_eq!(fx.text(fx.email_link), CONFIRMATION, "first timer was replaced");

    advance(Duration::from_millis(1400)).await;
    fx.page.settle().await;
    assert_eq!(fx.text(fx.email_link), EMAIL, "original label survives a second copy");
}

#[tokio::test(start_paused = true)]
async fn clipboard_failure_is_reported_without_touching_the_link() {
    let mut fx = Fixture::with_clipboard(MemoryClipboard::denying("Document is not focused"));
    fx.start();

    let event = fx.page.click(fx.email_link);
    fx.page.settle().await;

    assert!(event.default_prevented());
    assert!(fx.page.window().navigations().is_empty());
    assert_eq!(fx.text(fx.email_link), EMAIL);
    assert!(fx.page.document().style(fx.email_link, "color").is_none());
    assert_eq!(fx.clipboard.contents(), None);

    let [PageError::Clipboard { source: ClipboardError::Denied { message, .. }, context }] = fx.page.diagnostics()
    else {
        panic!("expected one clipboard diagnostic, got {:?}", fx.page.diagnostics());
    };
    assert_eq!(message, "Document is not focused");
    assert_eq!(context.as_deref(), Some("Failed to copy email"));
}

#[tokio::test(start_paused = true)]
async fn each_link_owns_its_revert() {
    let mut fx = Fixture::new();
    let body = fx.page.document().body();
    let second = fx
        .page
        .document_mut()
        .element("a")
        .attr("href", "mailto:dpo@example.com")
        .text("Data Protection Officer")
        .append_to(body);
    fx.start();

    fx.page.click(fx.email_link);
    fx.page.settle().await;
    advance(Duration::from_millis(1000)).await;
    fx.page.click(second);
    fx.page.settle().await;
    assert_eq!(fx.clipboard.contents().as_deref(), Some("dpo@example.com"));

    advance(Duration::from_millis(1000)).await;
    fx.page.settle().await;
    assert_eq!(fx.text(fx.email_link), EMAIL);
    assert_eq!(fx.text(second), CONFIRMATION);

    advance(Duration::from_millis(1000)).await;
    fx.page.settle().await;
    assert_eq!(fx.text(second), "Data Protection Officer");
}

#[tokio::test(start_paused = true)]
async fn revert_restores_nested_label_markup() {
    let mut fx = Fixture::new();
    let body = fx.page.document().body();
    let doc = fx.page.document_mut();
    let link = doc.element("a").attr("href", "mailto:dpo@example.com").text("Write to ").append_to(body);
    let strong = doc.element("strong").text("our DPO").append_to(link);
    fx.start();

    fx.page.click(link);
    fx.page.settle().await;
    assert_eq!(fx.text(link), CONFIRMATION);
    assert!(fx.page.document().children(link).is_empty());

    fx.page.click(link);
    fx.page.settle().await;
    advance(REVERT_AFTER).await;
    fx.page.settle().await;

    let doc = fx.page.document();
    assert_eq!(doc.children(link), vec![strong]);
    assert_eq!(doc.tag_name(strong), "strong");
    assert_eq!(doc.parent(strong), Some(link));
    assert_eq!(doc.text(link), "Write to our DPO");
    assert!(doc.attribute(link, LABEL_ATTRIBUTE).is_none());
}
