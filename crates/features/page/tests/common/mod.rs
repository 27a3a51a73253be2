#![allow(dead_code)]

use chrono::NaiveDate;
use policy_domain::config::PolicyConfig;
use policy_page::{Document, MemoryClipboard, MemoryDocument, MemoryWindow, NodeId, Page, Startup, StartupReport};
use std::sync::Arc;

pub const DOCUMENT_HEIGHT: f64 = 3000.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;
pub const EMAIL: &str = "privacy@example.com";

/// A privacy-policy page: header, table of contents, three sections, a contact link and
/// the back-to-top button.
#[derive(Debug)]
pub struct Fixture {
    pub page: Page<MemoryDocument, MemoryWindow>,
    pub clipboard: MemoryClipboard,
    pub header: NodeId,
    pub last_updated: NodeId,
    pub nav_links: Vec<NodeId>,
    pub sections: Vec<NodeId>,
    pub headings: Vec<NodeId>,
    pub content: NodeId,
    pub email_link: NodeId,
    pub broken_anchor: NodeId,
    pub back_to_top: NodeId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_clipboard(MemoryClipboard::new())
    }

    pub fn with_clipboard(clipboard: MemoryClipboard) -> Self {
        let mut doc = MemoryDocument::new();
        let body = doc.body();

        let header = doc.element("header").class("header").layout(0.0, 200.0).append_to(body);
        doc.element("h1").text("Privacy Policy").append_to(header);
        let last_updated =
            doc.element("p").class("last-updated").text("Last updated: November 30, 2025").append_to(header);

        let nav = doc.element("nav").class("table-of-contents").layout(200.0, 150.0).append_to(body);
        let ids = ["introduction", "data", "contact"];
        let nav_links =
            ids.iter().map(|id| doc.element("a").attr("href", &format!("#{id}")).text(id).append_to(nav)).collect();

        let content = doc.element("main").class("content").layout(400.0, 2400.0).append_to(body);
        let layout = [(400.0, 600.0), (1000.0, 800.0), (1800.0, 600.0)];
        let mut sections = Vec::new();
        let mut headings = Vec::new();
        for (id, (top, height)) in ids.iter().zip(layout) {
            let section = doc.element("section").class("section").id(id).layout(top, height).append_to(content);
            headings.push(doc.element("h2").text(id).append_to(section));
            doc.element("p").text("Body text.").append_to(section);
            doc.element("ul").append_to(section);
            sections.push(section);
        }

        let contact = sections[2];
        let email_link =
            doc.element("a").attr("href", &format!("mailto:{EMAIL}?subject=Privacy")).text(EMAIL).append_to(contact);
        let broken_anchor = doc.element("a").attr("href", "#nowhere").text("Broken").append_to(contact);
        let back_to_top = doc.element("button").id("backToTop").text("↑").append_to(body);

        let window = MemoryWindow::new(DOCUMENT_HEIGHT, VIEWPORT_HEIGHT);
        let page = Page::new(doc, window, Arc::new(clipboard.clone()));

        Self {
            page,
            clipboard,
            header,
            last_updated,
            nav_links,
            sections,
            headings,
            content,
            email_link,
            broken_anchor,
            back_to_top,
        }
    }

    pub fn start(&mut self) -> StartupReport {
        self.start_with(PolicyConfig::default())
    }

    pub fn start_with(&mut self, config: PolicyConfig) -> StartupReport {
        Startup::new(config).with_today(today()).run(&mut self.page)
    }

    pub fn text(&self, node: NodeId) -> String {
        self.page.document().text(node)
    }

    pub fn active_links(&self) -> Vec<NodeId> {
        self.nav_links.iter().copied().filter(|&l| self.page.document().has_class(l, "active")).collect()
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
}
