//! Completion queue for asynchronous page work.
//!
//! Futures run on the Tokio runtime; when one finishes it posts a callback that the page
//! applies on its own thread during [`Page::settle`](crate::Page::settle). Handlers never
//! block on asynchronous work.

use crate::dom::NodeId;
use crate::page::PageContext;
use fxhash::FxHashMap;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;

pub(crate) type Completion<D, W> = Box<dyn FnOnce(&mut PageContext<D, W>) + Send>;

/// Identifies a cancellable timer: one per element and purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub node: NodeId,
    pub purpose: &'static str,
}

impl TimerKey {
    #[must_use]
    pub const fn new(node: NodeId, purpose: &'static str) -> Self {
        Self { node, purpose }
    }
}

#[derive(Debug)]
struct ScheduledTimer {
    generation: u64,
    handle: AbortHandle,
}

pub(crate) struct TaskQueue<D, W> {
    sender: UnboundedSender<Completion<D, W>>,
    receiver: UnboundedReceiver<Completion<D, W>>,
    in_flight: usize,
    timers: FxHashMap<TimerKey, ScheduledTimer>,
    next_generation: u64,
}

impl<D, W> TaskQueue<D, W> {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = unbounded_channel();
        Self { sender, receiver, in_flight: 0, timers: FxHashMap::default(), next_generation: 0 }
    }

    pub(crate) fn sender(&self) -> UnboundedSender<Completion<D, W>> {
        self.sender.clone()
    }

    pub(crate) const fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub(crate) const fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Spawned operations whose completion has not been applied yet.
    pub(crate) const fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn try_next(&mut self) -> Option<Completion<D, W>> {
        self.receiver.try_recv().ok()
    }

    pub(crate) async fn next(&mut self) -> Option<Completion<D, W>> {
        self.receiver.recv().await
    }

    pub(crate) const fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Registers a timer, aborting the one it replaces.
    pub(crate) fn arm(&mut self, key: TimerKey, generation: u64, handle: AbortHandle) {
        if let Some(previous) = self.timers.insert(key, ScheduledTimer { generation, handle }) {
            previous.handle.abort();
        }
    }

    /// Claims the timer if `generation` is still the current one for `key`.
    pub(crate) fn claim(&mut self, key: TimerKey, generation: u64) -> bool {
        match self.timers.get(&key) {
            Some(timer) if timer.generation == generation => {
                self.timers.remove(&key);
                true
            },
            _ => false,
        }
    }

    pub(crate) fn cancel(&mut self, key: TimerKey) -> bool {
        self.timers.remove(&key).is_some_and(|timer| {
            timer.handle.abort();
            true
        })
    }

    pub(crate) fn is_scheduled(&self, key: TimerKey) -> bool {
        self.timers.contains_key(&key)
    }
}

impl<D, W> Drop for TaskQueue<D, W> {
    fn drop(&mut self) {
        for timer in self.timers.values() {
            timer.handle.abort();
        }
    }
}
