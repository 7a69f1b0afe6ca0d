//! Mock cache and region service stubs.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use grid_api::{
    AsyncEventQueue, AsyncEventQueueFactory, Cache, CacheServer, Region, RegionService,
};

use crate::{queue::MockAsyncEventQueueFactory, server::MockCacheServer, SharedRegistry};

/// Mock peer cache.
///
/// Resolves regions, queues and cache servers through the shared registry of
/// the [`MockObjects`](crate::MockObjects) that created it.
#[derive(Debug)]
pub struct MockCache {
    registry: SharedRegistry,
    closed: AtomicBool,
}

impl MockCache {
    pub(crate) fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            closed: AtomicBool::new(false),
        }
    }
}

impl RegionService for MockCache {
    fn region(&self, path: &str) -> Option<Arc<dyn Region>> {
        self.registry
            .lock()
            .regions
            .get(path)
            .map(|region| Arc::clone(region) as _)
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Cache for MockCache {
    fn create_async_event_queue_factory(&self) -> Box<dyn AsyncEventQueueFactory> {
        Box::new(MockAsyncEventQueueFactory::new(Arc::clone(&self.registry)))
    }

    fn add_cache_server(&self) -> Arc<dyn CacheServer> {
        let server = Arc::new(MockCacheServer::default());
        self.registry
            .lock()
            .cache_servers
            .push(Arc::clone(&server));
        server
    }

    fn cache_servers(&self) -> Vec<Arc<dyn CacheServer>> {
        self.registry
            .lock()
            .cache_servers
            .iter()
            .map(|server| Arc::clone(server) as _)
            .collect()
    }

    fn async_event_queue(&self, id: &str) -> Option<Arc<dyn AsyncEventQueue>> {
        self.registry
            .lock()
            .queues
            .get(id)
            .map(|queue| Arc::clone(queue) as _)
    }
}

/// Bare region service stub: lookups always miss, `close` flips the closed
/// flag.
#[derive(Debug, Default)]
pub struct MockRegionService {
    closed: AtomicBool,
}

impl RegionService for MockRegionService {
    fn region(&self, _path: &str) -> Option<Arc<dyn Region>> {
        None
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
