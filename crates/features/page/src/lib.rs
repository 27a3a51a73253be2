//! # Policy Page
//!
//! Behaviors of the privacy-policy page, written against injected capabilities instead of
//! browser globals:
//!
//! * [`Document`] for element lookup and mutation, [`Window`] for scrolling, history and
//!   printing, [`Clipboard`] for asynchronous text writes.
//! * [`Page`] is the event loop: it dispatches user events to listeners, computes
//!   intersection batches from layout and applies finished asynchronous work in
//!   [`Page::settle`].
//! * [`Startup`] installs the routines in their fixed order and reports what happened.
//!
//! The [`memory`] host implements the three capabilities in memory.
//!
//! ```rust
//! use policy_domain::config::PolicyConfig;
//! use policy_page::{Document, MemoryClipboard, MemoryDocument, MemoryWindow, Page, Startup};
//! use std::sync::Arc;
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! doc.element("button").id("backToTop").append_to(body);
//!
//! let mut page = Page::new(doc, MemoryWindow::new(3000.0, 800.0), Arc::new(MemoryClipboard::new()));
//! Startup::new(PolicyConfig::default()).run(&mut page);
//!
//! page.scroll(450.0);
//! let button = page.document().element_by_id("backToTop").unwrap();
//! assert!(page.document().has_class(button, "visible"));
//! ```

pub mod behaviors;
mod dom;
mod error;
mod events;
mod host;
pub mod memory;
mod observer;
mod page;
mod startup;
mod tasks;

pub use crate::behaviors::{Outcome, SkipReason};
pub use crate::dom::{Document, NodeId, Query};
pub use crate::error::{ClipboardError, PageError, PageErrorExt};
pub use crate::events::{Event, EventKind, EventTarget, Handler};
pub use crate::host::{Clipboard, ClipboardFuture, ScrollBehavior, Window};
pub use crate::memory::{ElementBuilder, MemoryClipboard, MemoryDocument, MemoryWindow, ScrollRequest};
pub use crate::observer::{IntersectionEntry, ObserverCallback, RootMargin, intersects, topmost};
pub use crate::page::{Page, PageContext};
pub use crate::startup::{Routine, Startup, StartupReport, report_load_timing};
pub use crate::tasks::TimerKey;
