//! In-memory host: a document tree, a window and a clipboard that record what the page
//! asked of them. Used by the tests and by non-browser consumers.

mod clipboard;
mod document;
mod window;

pub use clipboard::MemoryClipboard;
pub use document::{ElementBuilder, MemoryDocument};
pub use window::{MemoryWindow, ScrollRequest};
