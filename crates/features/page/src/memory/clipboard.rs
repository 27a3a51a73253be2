use crate::error::ClipboardError;
use crate::host::{Clipboard, ClipboardFuture};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ClipboardState {
    contents: Option<String>,
    writes: usize,
    denial: Option<Cow<'static, str>>,
}

/// Shared in-memory clipboard. Clones observe the same contents, so a test can keep one
/// handle while the page owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Arc<Mutex<ClipboardState>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes fail with [`ClipboardError::Denied`].
    #[must_use]
    pub fn denying(reason: impl Into<Cow<'static, str>>) -> Self {
        let clipboard = Self::new();
        clipboard.set_denial(Some(reason.into()));
        clipboard
    }

    pub fn set_denial(&self, reason: Option<Cow<'static, str>>) {
        self.state.lock().denial = reason;
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.state.lock().contents.clone()
    }

    /// Successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.lock().writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture {
        let state = Arc::clone(&self.state);
        let text = text.to_owned();
        Box::pin(async move {
            let mut state = state.lock();
            if let Some(reason) = &state.denial {
                return Err(ClipboardError::Denied { message: reason.clone(), context: None });
            }
            state.contents = Some(text);
            state.writes += 1;
            Ok(())
        })
    }
}
