use crate::host::{ScrollBehavior, Window};

/// A scroll the page asked the window to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Window that applies scrolls immediately and records every request.
///
/// Requested offsets are kept as asked; the live offset is clamped to the scrollable range.
#[derive(Debug, Clone, Default)]
pub struct MemoryWindow {
    scroll_y: f64,
    document_height: f64,
    viewport_height: f64,
    scroll_requests: Vec<ScrollRequest>,
    history: Vec<String>,
    navigations: Vec<String>,
    print_requests: usize,
}

impl MemoryWindow {
    #[must_use]
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        Self { document_height, viewport_height, ..Self::default() }
    }

    pub const fn set_document_height(&mut self, height: f64) {
        self.document_height = height;
    }

    pub const fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Last smooth scroll, i.e. the last one a behavior asked for.
    #[must_use]
    pub fn last_smooth_scroll(&self) -> Option<ScrollRequest> {
        self.scroll_requests.iter().rev().find(|r| r.behavior == ScrollBehavior::Smooth).copied()
    }

    /// Fragments pushed into history.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Full navigations performed.
    #[must_use]
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    #[must_use]
    pub const fn print_requests(&self) -> usize {
        self.print_requests
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

impl Window for MemoryWindow {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push(ScrollRequest { top, behavior });
        self.scroll_y = if top.is_finite() { top.clamp(0.0, self.max_scroll()) } else { 0.0 };
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.history.push(fragment.to_owned());
    }

    fn navigate(&mut self, href: &str) {
        self.navigations.push(href.to_owned());
    }

    fn print(&mut self) {
        self.print_requests += 1;
    }
}
