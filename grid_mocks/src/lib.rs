//! Mock objects for unit testing applications built against the grid client
//! API.
//!
//! # Design
//!
//! Application code is written against the `grid_api` traits; running it in a
//! unit test must not require a live grid. This crate provides [`MockObjects`],
//! a factory that fabricates explicit stub implementations of every `grid_api`
//! trait, wired together so that related mocks stay consistent: a mutator
//! created from a region reports that region back, a cache handle resolves
//! regions registered through the factory, and re-fetching a region by path
//! yields the same instance.
//!
//! Every stub is an explicit struct implementing one narrow trait, not a
//! dynamic proxy. Internal state lives behind a shared registry that is
//! explicit and injectable: construct one [`MockObjects`] per test, or share
//! one deliberately. Cloning a [`MockObjects`] (or handing out the caches it
//! creates) shares the registry.
//!
//! A shared registry is a sharp edge by design: state created in one test is
//! visible to any later test using the same handle until
//! [`MockObjects::destroy`] is called. Call it in teardown.
//!
//! ```
//! use grid_mocks::MockObjects;
//! use grid_api::{Region, RegionAttributes};
//!
//! let mocks = MockObjects::new();
//! let cache = mocks.mock_peer_cache();
//! let region = mocks.mock_region(cache, "users", RegionAttributes::new());
//! assert_eq!(region.full_path(), "/users");
//!
//! mocks.destroy();
//! ```

#![warn(missing_docs)]

// Workaround for "unused crate" lint false positives.
use workspace_hack as _;

use std::{collections::HashMap, sync::Arc};

use grid_api::{CacheServer, Region, RegionAttributes, RegionService};
use observability_deps::tracing::debug;
use parking_lot::Mutex;

mod cache;
mod queue;
mod region;
mod server;

pub use cache::{MockCache, MockRegionService};
pub use queue::{MockAsyncEventListener, MockAsyncEventQueue, MockAsyncEventQueueFactory};
pub use region::{MockAttributesMutator, MockRegion, MutatorCall};
pub use server::{MockCacheServer, MockClientSubscriptionConfig};

/// Shared store of every mock created through one [`MockObjects`] handle.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    pub(crate) regions: HashMap<String, Arc<MockRegion>>,
    pub(crate) queues: HashMap<String, Arc<MockAsyncEventQueue>>,
    pub(crate) cache_servers: Vec<Arc<MockCacheServer>>,
}

pub(crate) type SharedRegistry = Arc<Mutex<Registry>>;

/// Factory for mock grid objects.
///
/// Cheap to clone; all clones (and all caches created through them) share one
/// registry.
#[derive(Debug, Clone, Default)]
pub struct MockObjects {
    registry: SharedRegistry,
}

impl MockObjects {
    /// Create a factory with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a peer cache handle sharing this factory's registry.
    pub fn mock_peer_cache(&self) -> Arc<MockCache> {
        debug!("created mock peer cache");
        Arc::new(MockCache::new(Arc::clone(&self.registry)))
    }

    /// Create a top-level region and register it under its full path.
    ///
    /// The region keeps its own copy of `attributes`.
    pub fn mock_region(
        &self,
        region_service: Arc<dyn RegionService>,
        name: &str,
        attributes: RegionAttributes,
    ) -> Arc<MockRegion> {
        let region = MockRegion::new_top_level(region_service, name, attributes);
        self.register_region(&region);
        region
    }

    /// Create a sub-region of `parent` and register it under its full path.
    ///
    /// The sub-region inherits its region service from the parent.
    pub fn mock_sub_region(
        &self,
        parent: &Arc<MockRegion>,
        name: &str,
        attributes: RegionAttributes,
    ) -> Arc<MockRegion> {
        let region = MockRegion::new_sub_region(parent, name, attributes);
        self.register_region(&region);
        region
    }

    /// Create a bare region service stub: lookups always miss, `close` flips
    /// the closed flag.
    pub fn mock_region_service(&self) -> Arc<MockRegionService> {
        Arc::new(MockRegionService::default())
    }

    /// Create a cache server with default configuration and register it.
    pub fn mock_cache_server(&self) -> Arc<MockCacheServer> {
        let server = Arc::new(MockCacheServer::default());
        debug!(port = server.port(), "created mock cache server");
        self.registry
            .lock()
            .cache_servers
            .push(Arc::clone(&server));
        server
    }

    /// Create a client subscription config with default settings.
    pub fn mock_client_subscription_config(&self) -> Arc<MockClientSubscriptionConfig> {
        Arc::new(MockClientSubscriptionConfig::default())
    }

    /// Create a listener that records every batch of events it processes.
    pub fn mock_async_event_listener(&self) -> Arc<MockAsyncEventListener> {
        Arc::new(MockAsyncEventListener::default())
    }

    /// Look up a registered region by its full path.
    pub fn region(&self, path: &str) -> Option<Arc<MockRegion>> {
        self.registry.lock().regions.get(path).map(Arc::clone)
    }

    /// Clear all registry state.
    ///
    /// Idempotent; safe to call when nothing has been created.
    pub fn destroy(&self) {
        let mut registry = self.registry.lock();
        debug!(
            regions = registry.regions.len(),
            queues = registry.queues.len(),
            cache_servers = registry.cache_servers.len(),
            "destroying mock registry state"
        );
        registry.regions.clear();
        registry.queues.clear();
        registry.cache_servers.clear();
    }

    fn register_region(&self, region: &Arc<MockRegion>) {
        debug!(
            name = region.name(),
            full_path = region.full_path(),
            "registered mock region"
        );

        // re-registering a full path replaces the previous instance
        self.registry
            .lock()
            .regions
            .insert(region.full_path().to_owned(), Arc::clone(region));
    }

    #[cfg(test)]
    pub(crate) fn registry(&self) -> &SharedRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use grid_api::Cache;
    use test_helpers::{maybe_start_logging, tracing::LogCapture};

    use super::*;

    #[test]
    fn region_refetch_returns_same_instance() {
        maybe_start_logging();
        let mocks = MockObjects::new();
        let cache = mocks.mock_peer_cache();

        let region = mocks.mock_region(cache, "users", RegionAttributes::new());

        let via_factory = mocks.region("/users").unwrap();
        assert!(Arc::ptr_eq(&region, &via_factory));
    }

    #[test]
    fn region_visible_through_any_cache_handle() {
        let mocks = MockObjects::new();
        let cache_a = mocks.mock_peer_cache();
        let cache_b = mocks.mock_peer_cache();

        let region =
            mocks.mock_region(Arc::clone(&cache_a) as _, "users", RegionAttributes::new());

        let via_b = cache_b.region("/users").unwrap();
        assert_eq!(via_b.full_path(), region.full_path());
        assert!(std::ptr::eq(
            Arc::as_ptr(&via_b) as *const (),
            Arc::as_ptr(&region) as *const (),
        ));
    }

    #[test]
    fn reregistering_full_path_replaces() {
        let mocks = MockObjects::new();
        let cache = mocks.mock_peer_cache();

        let first = mocks.mock_region(Arc::clone(&cache) as _, "users", RegionAttributes::new());
        let second = mocks.mock_region(Arc::clone(&cache) as _, "users", RegionAttributes::new());
        assert!(!Arc::ptr_eq(&first, &second));

        let current = mocks.region("/users").unwrap();
        assert!(Arc::ptr_eq(&current, &second));
    }

    #[test]
    fn destroy_clears_all_state() {
        let mocks = MockObjects::new();
        let cache = mocks.mock_peer_cache();

        let region = mocks.mock_region(Arc::clone(&cache) as _, "users", RegionAttributes::new());
        let mut factory = cache.create_async_event_queue_factory();
        factory.pause_event_dispatching();
        factory.create("queue-1", mocks.mock_async_event_listener());
        mocks.mock_cache_server();

        mocks.destroy();

        assert!(mocks.region("/users").is_none());
        assert!(cache.region("/users").is_none());
        assert!(cache.async_event_queue("queue-1").is_none());
        assert!(cache.cache_servers().is_empty());

        // re-created mocks never observe pre-destroy state
        let recreated = mocks.mock_region(cache, "users", RegionAttributes::new());
        assert!(!Arc::ptr_eq(&region, &recreated));
        let queue = mocks
            .mock_peer_cache()
            .create_async_event_queue_factory()
            .create("queue-1", mocks.mock_async_event_listener());
        assert!(!queue.is_dispatching_paused());
    }

    #[test]
    fn destroy_is_idempotent() {
        let mocks = MockObjects::new();

        // nothing created yet
        mocks.destroy();
        mocks.destroy();

        let cache = mocks.mock_peer_cache();
        mocks.mock_region(cache, "users", RegionAttributes::new());
        mocks.destroy();
        mocks.destroy();
        assert!(mocks.region("/users").is_none());
    }

    #[test]
    fn clones_share_the_registry() {
        let mocks = MockObjects::new();
        let clone = mocks.clone();
        let cache = mocks.mock_peer_cache();

        mocks.mock_region(cache, "users", RegionAttributes::new());
        assert!(clone.region("/users").is_some());

        clone.destroy();
        assert!(mocks.region("/users").is_none());
    }

    #[test]
    fn creation_and_teardown_are_logged() {
        let capture = LogCapture::new();
        let mocks = MockObjects::new();
        let cache = mocks.mock_peer_cache();

        let region = mocks.mock_region(cache, "users", RegionAttributes::new());
        mocks.mock_sub_region(&region, "sessions", RegionAttributes::new());
        mocks.destroy();

        assert!(capture.contains("created mock peer cache"));
        assert!(capture.contains("registered mock region name=users full_path=/users"));
        assert!(capture.contains("full_path=/users/sessions"));
        assert!(capture.contains("destroying mock registry state regions=2"));
    }

    #[test]
    fn registry_starts_empty() {
        let mocks = MockObjects::new();
        let registry = mocks.registry().lock();
        assert!(registry.regions.is_empty());
        assert!(registry.queues.is_empty());
        assert!(registry.cache_servers.is_empty());
    }
}
