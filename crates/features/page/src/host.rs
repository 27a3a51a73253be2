//! View and clipboard capabilities injected into a [`Page`](crate::Page).

use crate::error::ClipboardError;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The browsing context around a document: scroll position, history and dialogs.
pub trait Window {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    fn document_height(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Records `fragment` (e.g. `#contact`) in history without navigating.
    fn push_fragment(&mut self, fragment: &str);

    /// Full navigation, the default action of an activated link.
    fn navigate(&mut self, href: &str);

    /// Opens the platform print dialog.
    fn print(&mut self);
}

pub type ClipboardFuture = Pin<Box<dyn Future<Output = Result<(), ClipboardError>> + Send>>;

/// Asynchronous clipboard access. The returned future owns everything it needs.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> ClipboardFuture;
}
