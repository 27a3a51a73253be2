use crate::dom::{Document, NodeId};
use crate::error::PageError;
use crate::events::{Event, EventKind, EventTarget, Handler, Listeners};
use crate::host::{Clipboard, ScrollBehavior, Window};
use crate::observer::{IntersectionEntry, Observer, RootMargin, intersects};
use crate::tasks::{TaskQueue, TimerKey};
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, error};

/// Idle rounds [`Page::settle`] waits for before it considers the queue drained.
const SETTLE_IDLE_ROUNDS: usize = 4;

/// What a listener can reach: the injected host plus the page's task queue and
/// diagnostic channel.
pub struct PageContext<D, W> {
    document: D,
    window: W,
    clipboard: Arc<dyn Clipboard>,
    tasks: TaskQueue<D, W>,
    diagnostics: Vec<PageError>,
}

impl<D, W> PageContext<D, W> {
    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    pub const fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub const fn window(&self) -> &W {
        &self.window
    }

    pub const fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    #[must_use]
    pub fn clipboard(&self) -> Arc<dyn Clipboard> {
        Arc::clone(&self.clipboard)
    }

    /// Routes a non-fatal error to the diagnostic channel.
    pub fn report(&mut self, err: PageError) {
        error!(error = %err, "Page routine failed");
        self.diagnostics.push(err);
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[PageError] {
        &self.diagnostics
    }

    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.tasks.cancel(key)
    }

    #[must_use]
    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.tasks.is_scheduled(key)
    }
}

impl<D: 'static, W: 'static> PageContext<D, W> {
    /// Runs `future` on the Tokio runtime and applies `then` to its output once the page
    /// settles.
    pub fn spawn<T, F, C>(&mut self, future: F, then: C)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        C: FnOnce(&mut Self, T) + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            self.report(PageError::from("No async runtime to run page work on"));
            return;
        };
        let sender = self.tasks.sender();
        self.tasks.begin();
        runtime.spawn(async move {
            let output = future.await;
            let completion = move |ctx: &mut Self| {
                ctx.tasks.finish();
                then(ctx, output);
            };
            // The page may be gone; nothing is waiting for the result then.
            let _ = sender.send(Box::new(completion));
        });
    }

    /// Runs `then` after `delay`, replacing any timer already scheduled under `key`.
    ///
    /// A replaced timer never runs, even if it already fired and is waiting in the queue.
    pub fn schedule<C>(&mut self, key: TimerKey, delay: Duration, then: C)
    where
        C: FnOnce(&mut Self) + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            self.report(PageError::from("No async runtime to schedule page timers on"));
            return;
        };
        let generation = self.tasks.next_generation();
        let sender = self.tasks.sender();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let completion = move |ctx: &mut Self| {
                if ctx.tasks.claim(key, generation) {
                    then(ctx);
                }
            };
            let _ = sender.send(Box::new(completion));
        });
        self.tasks.arm(key, generation, handle.abort_handle());
    }
}

impl<D, W> fmt::Debug for PageContext<D, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageContext")
            .field("in_flight", &self.tasks.in_flight())
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

/// The page event loop.
///
/// Owns the injected document, window and clipboard, dispatches user events to the
/// registered listeners, computes intersection batches from layout and applies finished
/// asynchronous work in [`Page::settle`]. Everything runs on the caller's thread; spawned
/// work needs a Tokio runtime.
pub struct Page<D, W> {
    ctx: PageContext<D, W>,
    listeners: Listeners<D, W>,
    observers: Vec<Observer<D, W>>,
}

impl<D, W> fmt::Debug for Page<D, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("ctx", &self.ctx)
            .field("listeners", &self.listeners.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<D: Document + 'static, W: Window + 'static> Page<D, W> {
    pub fn new(document: D, window: W, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            ctx: PageContext { document, window, clipboard, tasks: TaskQueue::new(), diagnostics: Vec::new() },
            listeners: Listeners::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.ctx.document
    }

    pub const fn document_mut(&mut self) -> &mut D {
        &mut self.ctx.document
    }

    #[must_use]
    pub const fn window(&self) -> &W {
        &self.ctx.window
    }

    pub const fn window_mut(&mut self) -> &mut W {
        &mut self.ctx.window
    }

    #[must_use]
    pub const fn context(&self) -> &PageContext<D, W> {
        &self.ctx
    }

    pub const fn context_mut(&mut self) -> &mut PageContext<D, W> {
        &mut self.ctx
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[PageError] {
        self.ctx.diagnostics()
    }

    pub fn add_listener<F>(&mut self, target: EventTarget, kind: EventKind, handler: F)
    where
        F: Fn(&mut PageContext<D, W>, &mut Event) + 'static,
    {
        let handler: Handler<D, W> = Rc::new(handler);
        self.listeners.add(target, kind, handler);
    }

    #[must_use]
    pub fn listener_count(&self, target: EventTarget, kind: EventKind) -> usize {
        self.listeners.count(target, kind)
    }

    /// Observes `targets` against `margin`. The callback receives batches of state changes.
    pub fn observe<F>(&mut self, margin: RootMargin, targets: Vec<NodeId>, callback: F)
    where
        F: Fn(&mut PageContext<D, W>, &[IntersectionEntry]) + 'static,
    {
        self.observers.push(Observer::new(margin, targets, Rc::new(callback)));
    }

    /// Dispatches `kind` at `target`, bubbling where the kind does.
    ///
    /// A listener that moves the scroll position triggers the scroll pass afterwards.
    pub fn dispatch(&mut self, target: EventTarget, kind: EventKind) -> Event {
        let scroll_before = self.ctx.window.scroll_y();
        let mut event = Event::new(kind, target);

        for current in self.propagation_path(target, kind) {
            event.set_current_target(current);
            for handler in self.listeners.snapshot(current, kind) {
                handler(&mut self.ctx, &mut event);
            }
        }

        if kind != EventKind::Scroll && (self.ctx.window.scroll_y() - scroll_before).abs() > f64::EPSILON {
            self.scrolled();
        }
        event
    }

    /// Activates `node`. Unless a listener prevents it, a link navigates.
    pub fn click(&mut self, node: NodeId) -> Event {
        let event = self.dispatch(EventTarget::Node(node), EventKind::Click);
        if !event.default_prevented()
            && let Some((_, href)) = self.ctx.document.enclosing_link(node)
        {
            debug!(%href, "Following link");
            self.ctx.window.navigate(&href);
        }
        event
    }

    pub fn focus(&mut self, node: NodeId) -> Event {
        self.dispatch(EventTarget::Node(node), EventKind::Focus)
    }

    pub fn blur(&mut self, node: NodeId) -> Event {
        self.dispatch(EventTarget::Node(node), EventKind::Blur)
    }

    pub fn hover(&mut self, node: NodeId) -> Event {
        self.dispatch(EventTarget::Node(node), EventKind::MouseEnter)
    }

    pub fn unhover(&mut self, node: NodeId) -> Event {
        self.dispatch(EventTarget::Node(node), EventKind::MouseLeave)
    }

    /// User scroll to `y`.
    pub fn scroll(&mut self, y: f64) {
        self.ctx.window.scroll_to(y, ScrollBehavior::Instant);
        self.scrolled();
    }

    /// Runs the scroll pass after the window's offset changed: scroll listeners first,
    /// then intersection observers.
    pub fn scrolled(&mut self) {
        self.dispatch(EventTarget::Window, EventKind::Scroll);
        self.refresh_intersections();
    }

    /// Recomputes every observer's targets against the current viewport and delivers the
    /// entries whose state changed.
    pub fn refresh_intersections(&mut self) {
        let scroll_y = self.ctx.window.scroll_y();
        let viewport = self.ctx.window.viewport_height();

        for observer in &mut self.observers {
            let band = observer.margin.band(scroll_y, viewport);
            let document = &self.ctx.document;
            let measured: Vec<IntersectionEntry> = observer
                .targets
                .iter()
                .map(|&target| {
                    let top = document.offset_top(target);
                    IntersectionEntry {
                        target,
                        is_intersecting: intersects(band, top, document.offset_height(target)),
                        top: top - scroll_y,
                    }
                })
                .collect();

            let changed = observer.accept(measured);
            if !changed.is_empty() {
                let callback = Rc::clone(&observer.callback);
                callback(&mut self.ctx, &changed);
            }
        }
    }

    /// Delivers a host-computed batch to the observers watching those targets.
    pub fn deliver_intersections(&mut self, entries: &[IntersectionEntry]) {
        for observer in &mut self.observers {
            let changed = observer.accept(entries.iter().copied());
            if !changed.is_empty() {
                let callback = Rc::clone(&observer.callback);
                callback(&mut self.ctx, &changed);
            }
        }
    }

    /// Applies finished asynchronous work until the queue stays empty.
    ///
    /// Waits for spawned operations (clipboard writes) to complete; pending timers are
    /// applied only if they are already due.
    pub async fn settle(&mut self) {
        let mut idle = 0;
        while idle < SETTLE_IDLE_ROUNDS {
            tokio::task::yield_now().await;

            let mut progressed = false;
            while let Some(completion) = self.ctx.tasks.try_next() {
                completion(&mut self.ctx);
                progressed = true;
            }

            if !progressed && self.ctx.tasks.in_flight() > 0 {
                if let Some(completion) = self.ctx.tasks.next().await {
                    completion(&mut self.ctx);
                    progressed = true;
                }
            }

            idle = if progressed { 0 } else { idle + 1 };
        }
    }

    /// Whether a timer is pending under `key`.
    #[must_use]
    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.ctx.is_scheduled(key)
    }

    fn propagation_path(&self, target: EventTarget, kind: EventKind) -> Vec<EventTarget> {
        let EventTarget::Node(node) = target else {
            return vec![target];
        };
        if !kind.bubbles() {
            return vec![target];
        }
        let mut path = vec![target];
        let mut current = self.ctx.document.parent(node);
        while let Some(ancestor) = current {
            path.push(EventTarget::Node(ancestor));
            current = self.ctx.document.parent(ancestor);
        }
        path
    }
}
