mod common;

use common::Fixture;
use policy_domain::config::PolicyConfig;
use policy_page::behaviors::{collapsible, print_button};
use policy_page::{
    Document, EventKind, EventTarget, MemoryClipboard, MemoryDocument, MemoryWindow, Outcome, Page, Query, Routine,
    SkipReason, Startup,
};
use std::sync::Arc;

#[tokio::test]
async fn default_startup_installs_the_standard_sequence() {
    let mut fx = Fixture::new();
    let report = fx.start();

    let routines: Vec<Routine> = report.entries().iter().map(|(r, _)| *r).collect();
    assert_eq!(routines, Routine::STANDARD);
    assert_eq!(report.installed().collect::<Vec<_>>(), Routine::STANDARD);
    assert!(fx.page.document().query(Query::Class(collapsible::INDICATOR_CLASS)).is_none());
}

#[tokio::test]
async fn empty_document_only_gets_injected_elements() {
    let mut page = Page::new(MemoryDocument::new(), MemoryWindow::new(2000.0, 800.0), Arc::new(MemoryClipboard::new()));
    let report = Startup::new(PolicyConfig::default()).run(&mut page);

    let missing = |selector: &str| Some(Outcome::Skipped(SkipReason::MissingElement(selector.to_owned())));
    assert_eq!(report.outcome(Routine::BackToTop).cloned(), missing("#backToTop"));
    assert_eq!(report.outcome(Routine::SmoothScroll).cloned(), missing("a[href^=\"#\"]"));
    assert_eq!(report.outcome(Routine::ActiveSection).cloned(), missing(".section"));
    assert_eq!(report.outcome(Routine::CopyEmail).cloned(), missing("a[href^=\"mailto:\"]"));
    assert_eq!(report.outcome(Routine::PrintButton).cloned(), missing(".header"));
    assert_eq!(report.outcome(Routine::LastUpdated).cloned(), missing(".last-updated"));
    assert_eq!(report.outcome(Routine::ReadingProgress), Some(&Outcome::Installed));
    assert_eq!(report.outcome(Routine::SkipLink), Some(&Outcome::Installed));

    page.scroll(600.0);
    assert!(page.diagnostics().is_empty());
}

#[tokio::test]
async fn sections_without_navigation_are_skipped() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    doc.element("section").class("section").id("intro").append_to(body);
    let mut page = Page::new(doc, MemoryWindow::new(2000.0, 800.0), Arc::new(MemoryClipboard::new()));

    let report = Startup::new(PolicyConfig::default()).run(&mut page);

    assert_eq!(
        report.outcome(Routine::ActiveSection),
        Some(&Outcome::Skipped(SkipReason::MissingElement(".table-of-contents a".to_owned())))
    );
}

#[tokio::test]
async fn ui_toggles_disable_routines() {
    let mut config = PolicyConfig::default();
    config.ui.show_print_button = false;
    config.ui.show_back_to_top = false;
    config.features.email_copy_to_clipboard = false;

    let mut fx = Fixture::new();
    let report = fx.start_with(config);

    for routine in [Routine::PrintButton, Routine::BackToTop, Routine::CopyEmail] {
        assert_eq!(report.outcome(routine), Some(&Outcome::Skipped(SkipReason::Disabled)), "{routine}");
    }
    assert!(fx.page.document().query(Query::Class(print_button::BUTTON_CLASS)).is_none());
    assert_eq!(fx.page.listener_count(EventTarget::Node(fx.back_to_top), EventKind::Click), 0);
    assert_eq!(fx.page.listener_count(EventTarget::Node(fx.email_link), EventKind::Click), 0);
}

#[tokio::test]
async fn collapsible_sections_run_last_when_enabled() {
    let mut config = PolicyConfig::default();
    config.features.collapsible_sections = true;

    let mut fx = Fixture::new();
    let report = fx.start_with(config);

    assert_eq!(report.entries().last(), Some(&(Routine::CollapsibleSections, Outcome::Installed)));
    assert_eq!(fx.page.document().query_all(Query::Class(collapsible::INDICATOR_CLASS)).len(), 3);
}

#[tokio::test]
async fn unparsable_date_skips_the_note() {
    let mut config = PolicyConfig::default();
    config.legal.last_updated = "sometime last year".to_owned();

    let mut fx = Fixture::new();
    let report = fx.start_with(config);

    assert_eq!(
        report.outcome(Routine::LastUpdated),
        Some(&Outcome::Skipped(SkipReason::UnparsableDate("sometime last year".to_owned())))
    );
    assert!(fx.page.document().children(fx.last_updated).is_empty());
}

#[tokio::test]
async fn startup_delivers_the_initial_batch() {
    let mut fx = Fixture::new();
    fx.page.scroll(900.0);

    fx.start();

    assert_eq!(fx.active_links(), vec![fx.nav_links[1]]);
}
