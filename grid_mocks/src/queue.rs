//! Mock async event queues, their factory, and a recording listener.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use grid_api::{AsyncEvent, AsyncEventListener, AsyncEventQueue, AsyncEventQueueFactory};
use observability_deps::tracing::debug;
use parking_lot::Mutex;

use crate::SharedRegistry;

/// Mock async event queue factory.
///
/// `pause_event_dispatching` marks the factory so that queues it subsequently
/// creates start in the paused state. Created queues are registered by id.
#[derive(Debug)]
pub struct MockAsyncEventQueueFactory {
    registry: SharedRegistry,
    pause_on_create: bool,
}

impl MockAsyncEventQueueFactory {
    pub(crate) fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            pause_on_create: false,
        }
    }
}

impl AsyncEventQueueFactory for MockAsyncEventQueueFactory {
    fn pause_event_dispatching(&mut self) {
        self.pause_on_create = true;
    }

    fn create(&self, id: &str, listener: Arc<dyn AsyncEventListener>) -> Arc<dyn AsyncEventQueue> {
        let queue = Arc::new(MockAsyncEventQueue {
            id: id.to_owned(),
            paused: AtomicBool::new(self.pause_on_create),
            listener,
        });

        debug!(
            id,
            paused = self.pause_on_create,
            "created mock async event queue"
        );

        self.registry
            .lock()
            .queues
            .insert(id.to_owned(), Arc::clone(&queue));
        queue
    }
}

/// Mock async event queue.
#[derive(Debug)]
pub struct MockAsyncEventQueue {
    id: String,
    paused: AtomicBool,
    listener: Arc<dyn AsyncEventListener>,
}

impl AsyncEventQueue for MockAsyncEventQueue {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_dispatching_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    fn resume_event_dispatching(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    fn async_event_listener(&self) -> Arc<dyn AsyncEventListener> {
        Arc::clone(&self.listener)
    }
}

/// Listener that records every batch of events it processes.
#[derive(Debug, Default)]
pub struct MockAsyncEventListener {
    batches: Mutex<Vec<Vec<AsyncEvent>>>,
}

impl MockAsyncEventListener {
    /// All processed batches, in order.
    pub fn batches(&self) -> Vec<Vec<AsyncEvent>> {
        self.batches.lock().clone()
    }
}

impl AsyncEventListener for MockAsyncEventListener {
    fn process_events(&self, events: &[AsyncEvent]) -> bool {
        self.batches.lock().push(events.to_vec());
        true
    }
}
